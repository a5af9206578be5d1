//! Document store boundary
//!
//! A `Collection` is an ordered set of JSON documents supporting insert,
//! filtered lookup, partial update, and delete. Two backends are provided:
//! `MemoryCollection` (ephemeral, insertion order) and `FileCollection`
//! (persistent, checksum-verified JSON file, atomic rewrite on mutation).
//!
//! All operations are synchronous and blocking. Failures surface
//! immediately; there are no retries.

mod errors;
mod file;
mod filter;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::FileCollection;
pub use filter::Filter;
pub use memory::MemoryCollection;

use serde_json::Value;

/// A persistent collection of schema-flexible JSON documents.
///
/// `update_one` and `delete_one` affect at most one document (the first
/// match in iteration order) and report whether a document matched.
pub trait Collection {
    /// Inserts one document. No uniqueness is enforced on any field.
    fn insert_one(&mut self, document: Value) -> StoreResult<()>;

    /// Returns the first document matching the filter, if any.
    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>>;

    /// Returns all documents matching the filter, in iteration order.
    fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>>;

    /// Merges `fields` into the first matching document, leaving fields not
    /// listed untouched. Returns whether a document matched.
    fn update_one(&mut self, filter: &Filter, fields: Value) -> StoreResult<bool>;

    /// Removes `field` from the first matching document. Returns whether a
    /// document matched (even when it did not carry the field).
    fn unset_one(&mut self, filter: &Filter, field: &str) -> StoreResult<bool>;

    /// Deletes the first matching document. Returns whether one matched.
    fn delete_one(&mut self, filter: &Filter) -> StoreResult<bool>;

    /// Number of documents in the collection.
    fn len(&self) -> usize;

    /// Returns true when the collection holds no documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Merges the fields of `fields` into `target` ($set semantics).
///
/// Both values must be JSON objects; non-object `fields` is a no-op.
pub(crate) fn merge_fields(target: &mut Value, fields: &Value) {
    if let (Value::Object(target), Value::Object(fields)) = (target, fields) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Removes a field from a document, if present.
pub(crate) fn remove_field(target: &mut Value, field: &str) {
    if let Value::Object(target) = target {
        target.remove(field);
    }
}
