use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DocstoreError {
    #[error("Store directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Invalid document name: {0:?}")]
    InvalidName(String),

    #[error("Failed to write payload {name:?}: {source}")]
    PayloadWrite {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Index I/O error: {0}")]
    IndexIo(#[from] std::io::Error),

    #[error("Index serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document id: {0:?}")]
    InvalidIdentifier(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Config error: {0}")]
    Config(String),
}

impl DocstoreError {
    /// True for errors caused by what the caller asked for rather than by
    /// the state of the disk.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DocstoreError::InvalidName(_)
                | DocstoreError::InvalidIdentifier(_)
                | DocstoreError::DocumentNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DocstoreError>;
