//! # Domain Model: Document Records and Names
//!
//! A [`DocumentRecord`] is one entry of the store index. Records are appended
//! on creation and never removed; the only mutation ever applied to a stored
//! record is the one-way soft-delete (`deleted: false → true`).
//!
//! ## Wire Shape
//!
//! The record is persisted in `index.json` and returned by the HTTP API with
//! the same JSON shape:
//!
//! ```text
//! {"id": "<uuid>", "title": "<name>", "date": "<RFC3339>", "tags": [...], "deleted": false}
//! ```
//!
//! In Rust the fields carry their meaning (`name`, `created_at`); serde renames
//! them to the wire keys.
//!
//! ## Document Names
//!
//! The client-supplied name doubles as the payload filename inside the store
//! directory, so it has to be a single plain path component. See
//! [`validate_name`] for the exact rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DocstoreError, Result};
use crate::store::INDEX_FILENAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    #[serde(rename = "title")]
    pub name: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl DocumentRecord {
    pub fn new(name: String, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            tags,
            deleted: false,
        }
    }

    /// Marks the record as soft-deleted. Returns false if it already was.
    pub fn mark_deleted(&mut self) -> bool {
        if self.deleted {
            return false;
        }
        self.deleted = true;
        true
    }
}

/// Parses the textual form of a document id.
pub fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| DocstoreError::InvalidIdentifier(id.to_string()))
}

/// Validates a document name for use as a payload filename.
///
/// # Rules
/// - Must not be empty or whitespace-only
/// - Must not be `.` or `..`
/// - Must not contain `/`, `\` or NUL
/// - Must not be the index filename
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name == INDEX_FILENAME
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(DocstoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
