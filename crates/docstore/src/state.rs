//! # Application State
//!
//! Shared state handed to every route handler via the `State` extractor.

use std::sync::Arc;

use docstoreapp::config::DEFAULT_MAX_PAYLOAD_BYTES;
use docstoreapp::store::{DocumentStore, StorageBackend};

use crate::error::AppError;

/// Shared application state: the one store handle plus request limits.
pub struct AppState<B: StorageBackend> {
    store: Arc<DocumentStore<B>>,
    max_payload_bytes: usize,
}

impl<B: StorageBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            max_payload_bytes: self.max_payload_bytes,
        }
    }
}

impl<B: StorageBackend + Send + 'static> AppState<B> {
    pub fn new(store: DocumentStore<B>) -> Self {
        Self {
            store: Arc::new(store),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }

    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_bytes
    }

    /// Run a store operation on the blocking pool.
    ///
    /// Store calls hold the store lock across synchronous file I/O, so they
    /// must not run on the async workers.
    pub async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&DocumentStore<B>) -> docstoreapp::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let outcome = tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?;
        outcome.map_err(AppError::from)
    }
}
