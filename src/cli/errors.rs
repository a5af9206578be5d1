//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::inventory::InventoryError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors. Config and I/O errors are fatal; invalid numeric input is
/// recovered locally by re-prompting.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// stdin/stdout failure, including end of input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Operator-entered text failed to parse as the required numeric type
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    /// Store failure propagated out of an operation (no retry)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Adapter failure not handled at the prompt
    #[error(transparent)]
    Operation(#[from] InventoryError),
}

impl CliError {
    /// Config error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Invalid numeric input
    pub fn invalid_numeric(input: impl Into<String>) -> Self {
        Self::InvalidNumericInput(input.into())
    }
}
