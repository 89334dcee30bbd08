//! Application Layer
//!
//! Use cases that orchestrate domain services and ports.

pub mod deploy;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
