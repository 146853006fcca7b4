//! CLI-specific error types
//!
//! CLI errors are fatal: they are printed to stderr and the process exits
//! non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime or server startup failure
    #[error("Boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    /// Create a boot failure error
    pub fn boot_failed(message: impl Into<String>) -> Self {
        CliError::BootFailed(message.into())
    }
}
