//! Common test utilities for stevedore CLI tests.
//!
//! Provides `TestEnv` (isolated project directory plus CLI runner) and
//! reusable artifact fixtures.

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
