use super::backend::StorageBackend;
use super::INDEX_FILENAME;
use crate::error::{DocstoreError, Result};
use crate::model::DocumentRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILENAME)
    }

    fn payload_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write `bytes` to `target` through a hidden temp file in the same
    /// directory, so the rename is atomic on the same filesystem.
    fn write_atomic(&self, target: &Path, prefix: &str, bytes: &[u8]) -> io::Result<()> {
        let tmp_path = self.root.join(format!(".{}-{}.tmp", prefix, Uuid::new_v4()));
        fs::write(&tmp_path, bytes)?;
        if let Err(err) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn index_exists(&self) -> Result<bool> {
        match fs::metadata(self.index_path()) {
            Ok(meta) => Ok(meta.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(DocstoreError::IndexIo(err)),
        }
    }

    fn load_index(&self) -> Result<Vec<DocumentRecord>> {
        let content = fs::read_to_string(self.index_path()).map_err(DocstoreError::IndexIo)?;
        let records: Vec<DocumentRecord> =
            serde_json::from_str(&content).map_err(DocstoreError::Serialization)?;
        Ok(records)
    }

    fn save_index(&mut self, records: &[DocumentRecord]) -> Result<()> {
        let content = serde_json::to_vec_pretty(records).map_err(DocstoreError::Serialization)?;
        self.write_atomic(&self.index_path(), "index", &content)
            .map_err(DocstoreError::IndexIo)
    }

    fn write_payload(&mut self, name: &str, payload: &[u8]) -> Result<()> {
        self.write_atomic(&self.payload_path(name), "payload", payload)
            .map_err(|source| DocstoreError::PayloadWrite {
                name: name.to_string(),
                source,
            })
    }
}
