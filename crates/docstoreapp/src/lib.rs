//! # Docstore Architecture
//!
//! Docstore is a minimal document store: clients upload named byte blobs,
//! list the metadata of every stored document, and soft-delete documents by id.
//! This crate is the **UI-agnostic core**; the HTTP gateway lives in the
//! `docstore` crate and is only a thin adapter over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway (docstore crate)                                   │
//! │  - Routes, query parsing, HTTP status mapping               │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  DocumentStore (store/doc_store.rs)                         │
//! │  - Bootstrap, create, soft-delete, list                     │
//! │  - One lock serializing every operation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StorageBackend (store/backend.rs)                          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`store`]: Storage abstraction, implementations and the locked store handle
//! - [`model`]: `DocumentRecord` and the document name rules
//! - [`config`]: Process configuration file
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use error::{DocstoreError, Result};
pub use model::DocumentRecord;
pub use store::{DocumentStore, FsBackend, MemBackend, StorageBackend};
