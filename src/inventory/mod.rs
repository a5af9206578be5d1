//! Inventory Store Adapter subsystem
//!
//! Single-shot, synchronous operations against an injected collection
//! handle: add, update, remove, search, list-all, plus explicit
//! set-discount and clear-discount. No state machine, no retries.

mod adapter;
mod errors;

pub use adapter::{
    add, clear_discount, find_by_name, list_all, remove, search, set_discount, update,
};
pub use errors::{InventoryError, InventoryResult};
