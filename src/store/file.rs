//! File-backed collection backend
//!
//! Documents live in a single JSON file at
//! `<data_dir>/<database>/<collection>.json`, wrapped in an envelope that
//! carries a CRC32 checksum over the serialized document array. Every read
//! of the file validates the checksum; a mismatch aborts the open. Every
//! mutation rewrites the file through a temp file, fsyncs it, then renames
//! it over the old one, so the file on disk is always a complete envelope.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::filter::Filter;
use super::{Collection, MemoryCollection};

/// On-disk shape of a collection file
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    /// CRC32 over the serialized `documents` array
    checksum: u32,
    documents: Vec<Value>,
}

/// Persistent collection of JSON documents.
///
/// The whole collection is loaded at open and held in memory; the handle is
/// acquired once at startup and dropped at process exit.
#[derive(Debug)]
pub struct FileCollection {
    path: PathBuf,
    documents: MemoryCollection,
}

impl FileCollection {
    /// Opens the named collection under `data_dir/database`, creating the
    /// directory (and an empty collection) if missing.
    pub fn open(data_dir: &Path, database: &str, collection: &str) -> StoreResult<Self> {
        let dir = data_dir.join(database);
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::io(format!("Failed to create data directory: {}", dir.display()), e)
        })?;

        let path = dir.join(format!("{}.json", collection));
        let documents = match fs::read(&path) {
            Ok(bytes) => Self::decode(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::io(
                    format!("Failed to read collection file: {}", path.display()),
                    e,
                ))
            }
        };

        Ok(Self {
            path,
            documents: MemoryCollection::from_documents(documents),
        })
    }

    /// Path of the backing file (for diagnostics and tests)
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(path: &Path, bytes: &[u8]) -> StoreResult<Vec<Value>> {
        let envelope: Envelope = serde_json::from_slice(bytes).map_err(|e| {
            StoreError::corrupt(format!("{}: {}", path.display(), e))
        })?;

        let payload = serde_json::to_vec(&envelope.documents)
            .map_err(|e| StoreError::corrupt(format!("{}: {}", path.display(), e)))?;
        if checksum(&payload) != envelope.checksum {
            return Err(StoreError::corrupt(format!(
                "{}: checksum mismatch",
                path.display()
            )));
        }

        Ok(envelope.documents)
    }

    /// Rewrites the backing file atomically: temp file, fsync, rename.
    fn persist(&self) -> StoreResult<()> {
        let payload = serde_json::to_vec(self.documents.documents())
            .map_err(|e| StoreError::corrupt(e.to_string()))?;
        let envelope = Envelope {
            checksum: checksum(&payload),
            documents: self.documents.documents().to_vec(),
        };
        let bytes = serde_json::to_vec(&envelope)
            .map_err(|e| StoreError::corrupt(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)
                .map_err(|e| {
                    StoreError::io(
                        format!("Failed to open temp file: {}", tmp_path.display()),
                        e,
                    )
                })?;
            file.write_all(&bytes)
                .map_err(|e| StoreError::io("Failed to write collection file", e))?;
            file.sync_all()
                .map_err(|e| StoreError::io("Failed to fsync collection file", e))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            StoreError::io(
                format!("Failed to replace collection file: {}", self.path.display()),
                e,
            )
        })?;

        // Make the rename durable as well.
        if let Some(dir) = self.path.parent() {
            if let Ok(dir_file) = File::open(dir) {
                let _ = dir_file.sync_all();
            }
        }

        Ok(())
    }
}

impl Collection for FileCollection {
    fn insert_one(&mut self, document: Value) -> StoreResult<()> {
        self.documents.insert_one(document)?;
        self.persist()
    }

    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>> {
        self.documents.find_one(filter)
    }

    fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>> {
        self.documents.find(filter)
    }

    fn update_one(&mut self, filter: &Filter, fields: Value) -> StoreResult<bool> {
        let matched = self.documents.update_one(filter, fields)?;
        if matched {
            self.persist()?;
        }
        Ok(matched)
    }

    fn unset_one(&mut self, filter: &Filter, field: &str) -> StoreResult<bool> {
        let matched = self.documents.unset_one(filter, field)?;
        if matched {
            self.persist()?;
        }
        Ok(matched)
    }

    fn delete_one(&mut self, filter: &Filter) -> StoreResult<bool> {
        let matched = self.documents.delete_one(filter)?;
        if matched {
            self.persist()?;
        }
        Ok(matched)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

/// CRC32 (IEEE) checksum over the payload bytes
fn checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
