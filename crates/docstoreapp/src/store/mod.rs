//! # Storage Layer
//!
//! The store keeps two kinds of state inside one directory:
//!
//! 1. **Index**: `index.json`, a JSON array of every [`DocumentRecord`] ever
//!    created, in insertion order. It is the only source of truth for which
//!    documents exist and whether they are soft-deleted.
//! 2. **Payloads**: one file per document, named by the document's name,
//!    holding the raw bytes uploaded at creation.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: the "how" of storage (raw index and payload I/O).
//! - [`doc_store::DocumentStore`]: the "what" (bootstrap, create, soft-delete,
//!   listing) and the single lock serializing all of it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, rooted at the store directory.
//! - [`mem_backend::MemBackend`]: in-memory, with switchable failures for tests.
//!
//! ## Write Ordering
//!
//! `create` writes the payload strictly before appending the record to the
//! index, so a record never points at a payload that was not written. If the
//! index write then fails, the payload stays on disk unreferenced; there is no
//! automatic reconciliation of such orphans.
//!
//! ## Deletion Lifecycle
//!
//! Deletion is soft only: the record's `deleted` flag flips to `true` and the
//! index is written back. Payload bytes are never touched.
//!
//! ## Storage Layout
//!
//! ```text
//! <store-dir>/
//! ├── index.json     # Metadata for all documents (JSON array)
//! └── <name>         # One payload file per document name
//! ```
//!
//! [`DocumentRecord`]: crate::model::DocumentRecord

pub mod backend;
pub mod doc_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use doc_store::DocumentStore;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Filename of the index inside the store directory.
pub const INDEX_FILENAME: &str = "index.json";
