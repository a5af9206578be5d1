//! Store error types

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised at the document-store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the collection file failed
    #[error("Store I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The collection file exists but cannot be trusted
    #[error("Corrupt collection file: {0}")]
    Corrupt(String),

    /// The search pattern is not a valid regular expression
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
}

impl StoreError {
    /// I/O failure with context
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Corrupt collection file
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }

    /// Invalid search pattern
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    /// Error code string, format STOCK_CATEGORY_NAME
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "STOCK_STORE_IO",
            Self::Corrupt(_) => "STOCK_STORE_CORRUPT",
            Self::InvalidPattern(_) => "STOCK_STORE_INVALID_PATTERN",
        }
    }
}
