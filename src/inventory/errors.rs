//! Inventory adapter error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the inventory store adapter
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Update or remove referenced a name with no matching document
    #[error("Product not found in the inventory")]
    NotFound,

    /// Update of a discounted product was given no new discount
    #[error("A new discount is required when updating a discounted product")]
    DiscountRequired,

    /// A stored document does not deserialize as a product
    #[error("Malformed product document: {0}")]
    Malformed(String),

    /// Store failure, propagated without retry
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for InventoryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
