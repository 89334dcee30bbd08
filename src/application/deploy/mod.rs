//! Deploy use case module

mod options;
mod result;
mod use_case;


pub use options::{DeployOptions, DEFAULT_LEDGER_FILE};
pub use result::DeployResult;
pub use use_case::DeployUseCase;
