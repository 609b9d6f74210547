use crate::error::Result;
use crate::model::DocumentRecord;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocumentStore handles the "what" (bootstrap, locking, record rules).
///
/// Writers take `&mut self`: the store only ever calls them through its lock.
pub trait StorageBackend {
    // --- Index Operations ---

    /// Whether the index has been created yet.
    fn index_exists(&self) -> Result<bool>;

    /// Load every record of the index, in insertion order.
    fn load_index(&self) -> Result<Vec<DocumentRecord>>;

    /// Replace the index with `records`.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never see a torn index.
    fn save_index(&mut self, records: &[DocumentRecord]) -> Result<()>;

    // --- Payload Operations ---

    /// Write the payload for the document `name`, replacing any previous bytes.
    fn write_payload(&mut self, name: &str, payload: &[u8]) -> Result<()>;
}
