use super::backend::StorageBackend;
use crate::error::{DocstoreError, Result};
use crate::model::DocumentRecord;
use std::collections::HashMap;
use std::io;

/// In-memory storage backend for testing.
///
/// Starts without an index, like a fresh directory. Failures can be switched
/// on per kind of I/O to exercise error handling in the store and above it.
#[derive(Default)]
pub struct MemBackend {
    index: Option<Vec<DocumentRecord>>,
    payloads: HashMap<String, Vec<u8>>,
    fail_index_reads: bool,
    fail_index_writes: bool,
    fail_payload_writes: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing index instead of an absent one.
    pub fn with_records(mut self, records: Vec<DocumentRecord>) -> Self {
        self.index = Some(records);
        self
    }

    pub fn fail_index_reads(mut self) -> Self {
        self.fail_index_reads = true;
        self
    }

    pub fn fail_index_writes(mut self) -> Self {
        self.fail_index_writes = true;
        self
    }

    pub fn fail_payload_writes(mut self) -> Self {
        self.fail_payload_writes = true;
        self
    }

    pub fn payload(&self, name: &str) -> Option<&[u8]> {
        self.payloads.get(name).map(Vec::as_slice)
    }

    fn simulated(what: &str) -> io::Error {
        io::Error::other(format!("simulated {} failure", what))
    }
}

impl StorageBackend for MemBackend {
    fn index_exists(&self) -> Result<bool> {
        Ok(self.index.is_some())
    }

    fn load_index(&self) -> Result<Vec<DocumentRecord>> {
        if self.fail_index_reads {
            return Err(DocstoreError::IndexIo(Self::simulated("index read")));
        }
        self.index.clone().ok_or_else(|| {
            DocstoreError::IndexIo(io::Error::new(io::ErrorKind::NotFound, "index missing"))
        })
    }

    fn save_index(&mut self, records: &[DocumentRecord]) -> Result<()> {
        if self.fail_index_writes {
            return Err(DocstoreError::IndexIo(Self::simulated("index write")));
        }
        self.index = Some(records.to_vec());
        Ok(())
    }

    fn write_payload(&mut self, name: &str, payload: &[u8]) -> Result<()> {
        if self.fail_payload_writes {
            return Err(DocstoreError::PayloadWrite {
                name: name.to_string(),
                source: Self::simulated("payload write"),
            });
        }
        self.payloads.insert(name.to_string(), payload.to_vec());
        Ok(())
    }
}
