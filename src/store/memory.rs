//! In-memory collection backend

use serde_json::Value;

use super::errors::StoreResult;
use super::filter::Filter;
use super::{merge_fields, remove_field, Collection};

/// Ephemeral collection holding documents in insertion order.
///
/// Used by tests and as the document table behind `FileCollection`.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: Vec<Value>,
}

impl MemoryCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection over existing documents
    pub fn from_documents(documents: Vec<Value>) -> Self {
        Self { documents }
    }

    /// Borrows the underlying documents in iteration order
    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    fn position(&self, filter: &Filter) -> Option<usize> {
        self.documents.iter().position(|doc| filter.is_match(doc))
    }
}

impl Collection for MemoryCollection {
    fn insert_one(&mut self, document: Value) -> StoreResult<()> {
        self.documents.push(document);
        Ok(())
    }

    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>> {
        Ok(self
            .documents
            .iter()
            .find(|doc| filter.is_match(doc))
            .cloned())
    }

    fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>> {
        Ok(self
            .documents
            .iter()
            .filter(|doc| filter.is_match(doc))
            .cloned()
            .collect())
    }

    fn update_one(&mut self, filter: &Filter, fields: Value) -> StoreResult<bool> {
        match self.position(filter) {
            Some(idx) => {
                merge_fields(&mut self.documents[idx], &fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn unset_one(&mut self, filter: &Filter, field: &str) -> StoreResult<bool> {
        match self.position(filter) {
            Some(idx) => {
                remove_field(&mut self.documents[idx], field);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_one(&mut self, filter: &Filter) -> StoreResult<bool> {
        match self.position(filter) {
            Some(idx) => {
                self.documents.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
