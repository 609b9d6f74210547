use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use crate::error::{DocstoreError, Result};
use crate::model::{parse_id, validate_name, DocumentRecord};
use parking_lot::Mutex;
use std::path::Path;
use tracing::{debug, info, warn};

/// Handle to a document store.
///
/// The backend lives inside a single mutex: every operation, reads included,
/// holds it for its whole read-modify-write, so operations are linearizable.
/// Nothing but the backend is cached; each call re-reads the index.
pub struct DocumentStore<B: StorageBackend> {
    pub(crate) backend: Mutex<B>,
}

impl DocumentStore<FsBackend> {
    /// Open the store rooted at `dir`, creating an empty index if none exists.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DocstoreError::DirectoryNotFound(dir.to_path_buf()));
        }
        Self::with_backend(FsBackend::new(dir))
    }
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn with_backend(mut backend: B) -> Result<Self> {
        if !backend.index_exists()? {
            info!("Index file doesn't exist, creating an empty one");
            backend.save_index(&[])?;
        }
        Ok(Self {
            backend: Mutex::new(backend),
        })
    }

    /// Store `payload` under `name` and append a new record to the index.
    ///
    /// The payload is written before the index, so a listed record always
    /// has its bytes on disk.
    pub fn create(&self, name: &str, tags: Vec<String>, payload: &[u8]) -> Result<DocumentRecord> {
        if let Err(err) = validate_name(name) {
            warn!(name, "Rejecting document name");
            return Err(err);
        }

        let mut backend = self.backend.lock();
        backend.write_payload(name, payload)?;

        let record = DocumentRecord::new(name.to_string(), tags);
        let mut records = backend.load_index()?;
        records.push(record.clone());
        backend.save_index(&records)?;

        info!(id = %record.id, name, bytes = payload.len(), "Document created");
        Ok(record)
    }

    /// Soft-delete the document with the given id and persist the change.
    ///
    /// Deleting a document that is already deleted succeeds without touching
    /// the index.
    pub fn delete(&self, id: &str) -> Result<DocumentRecord> {
        let id = parse_id(id)?;

        let mut backend = self.backend.lock();
        let mut records = backend.load_index()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DocstoreError::DocumentNotFound(id))?;

        if !record.mark_deleted() {
            debug!(%id, "Document already deleted");
            return Ok(record.clone());
        }
        let deleted = record.clone();
        backend.save_index(&records)?;

        info!(%id, name = %deleted.name, "Document deleted");
        Ok(deleted)
    }

    /// Every record in the index, soft-deleted ones included.
    pub fn list_all(&self) -> Result<Vec<DocumentRecord>> {
        let backend = self.backend.lock();
        backend.load_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use chrono::Utc;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn store() -> DocumentStore<MemBackend> {
        DocumentStore::with_backend(MemBackend::new()).unwrap()
    }

    #[test]
    fn test_bootstraps_empty_index() {
        let store = store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_keeps_existing_index() {
        let existing = DocumentRecord::new("old.txt".into(), vec![]);
        let backend = MemBackend::new().with_records(vec![existing.clone()]);
        let store = DocumentStore::with_backend(backend).unwrap();

        assert_eq!(store.list_all().unwrap(), vec![existing]);
    }

    #[test]
    fn test_create_appends_record_and_payload() {
        let store = store();
        let before = Utc::now();

        let record = store
            .create("report.txt", vec!["q3".into()], b"hello")
            .unwrap();

        assert_eq!(record.name, "report.txt");
        assert_eq!(record.tags, vec!["q3".to_string()]);
        assert!(!record.deleted);
        assert!(record.created_at >= before);

        assert_eq!(store.list_all().unwrap(), vec![record]);
        assert_eq!(
            store.backend.lock().payload("report.txt"),
            Some(&b"hello"[..])
        );
    }

    #[test]
    fn test_create_preserves_insertion_order() {
        let store = store();
        let names = ["c", "a", "b"];
        for name in names {
            store.create(name, vec![], b"").unwrap();
        }

        let listed: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = store();
        let ids: HashSet<Uuid> = (0..50)
            .map(|i| store.create(&format!("doc-{i}"), vec![], b"x").unwrap().id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_same_name_keeps_separate_records() {
        let store = store();
        let first = store.create("dup.txt", vec![], b"one").unwrap();
        let second = store.create("dup.txt", vec![], b"two").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_all().unwrap().len(), 2);
        assert_eq!(store.backend.lock().payload("dup.txt"), Some(&b"two"[..]));
    }

    #[test]
    fn test_create_rejects_unsafe_name() {
        let store = store();
        let err = store.create("../escape", vec![], b"x").unwrap_err();

        assert!(matches!(err, DocstoreError::InvalidName(_)));
        assert!(store.list_all().unwrap().is_empty());
        assert!(store.backend.lock().payload("../escape").is_none());
    }

    #[test]
    fn test_payload_failure_leaves_index_untouched() {
        let backend = MemBackend::new().with_records(vec![]).fail_payload_writes();
        let store = DocumentStore::with_backend(backend).unwrap();

        let err = store.create("a.txt", vec![], b"x").unwrap_err();
        assert!(matches!(err, DocstoreError::PayloadWrite { .. }));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_index_write_failure_orphans_payload() {
        let backend = MemBackend::new().with_records(vec![]).fail_index_writes();
        let store = DocumentStore::with_backend(backend).unwrap();

        let err = store.create("a.txt", vec![], b"x").unwrap_err();
        assert!(matches!(err, DocstoreError::IndexIo(_)));
        assert!(store.list_all().unwrap().is_empty());
        assert_eq!(store.backend.lock().payload("a.txt"), Some(&b"x"[..]));
    }

    #[test]
    fn test_bootstrap_surfaces_index_write_failure() {
        let result = DocumentStore::with_backend(MemBackend::new().fail_index_writes());
        assert!(matches!(result, Err(DocstoreError::IndexIo(_))));
    }

    #[test]
    fn test_delete_marks_and_persists() {
        let store = store();
        let record = store.create("report.txt", vec![], b"hello").unwrap();

        let deleted = store.delete(&record.id.to_string()).unwrap();
        assert_eq!(deleted.id, record.id);
        assert!(deleted.deleted);

        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].deleted);
        assert_eq!(listed[0].created_at, record.created_at);
    }

    #[test]
    fn test_delete_leaves_payload_and_other_records() {
        let store = store();
        let keep = store.create("keep.txt", vec![], b"k").unwrap();
        let gone = store.create("gone.txt", vec![], b"g").unwrap();

        store.delete(&gone.id.to_string()).unwrap();

        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, keep.id);
        assert!(!listed[0].deleted);
        assert!(listed[1].deleted);
        assert_eq!(store.backend.lock().payload("gone.txt"), Some(&b"g"[..]));
    }

    #[test]
    fn test_delete_twice_succeeds() {
        let store = store();
        let record = store.create("a", vec![], b"").unwrap();
        let id = record.id.to_string();

        store.delete(&id).unwrap();
        let again = store.delete(&id).unwrap();

        assert!(again.deleted);
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let store = store();
        store.create("a", vec![], b"").unwrap();
        let missing = Uuid::new_v4();

        let err = store.delete(&missing.to_string()).unwrap_err();
        assert!(matches!(err, DocstoreError::DocumentNotFound(id) if id == missing));

        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].deleted);
    }

    #[test]
    fn test_delete_malformed_id() {
        let store = store();
        let err = store.delete("definitely-not-a-uuid").unwrap_err();
        assert!(matches!(err, DocstoreError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_list_surfaces_read_failure() {
        let backend = MemBackend::new().with_records(vec![]).fail_index_reads();
        let store = DocumentStore::with_backend(backend).unwrap();
        assert!(matches!(store.list_all(), Err(DocstoreError::IndexIo(_))));
    }
}
