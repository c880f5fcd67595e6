//! File metadata records
//!
//! A `File` is the leaf record the head node keeps for stored content. The
//! bytes themselves live on data nodes; the record carries only an opaque
//! reference the storage layer knows how to resolve.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque reference to where a file's content is physically stored.
///
/// The namespace never interprets this value; it is minted by the storage
/// layer when content is written and handed back when content is streamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(token: impl Into<String>) -> Self {
        ContentRef(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True while no content has been attached yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// File metadata record, exclusively owned by its parent folder.
///
/// `locked` is raised while content is being written or reserved; callers
/// must refuse to delete or move a locked file. The name is fixed at
/// creation because it is the record's sort key within the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    name: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub locked: bool,
    pub content: ContentRef,
}

impl File {
    /// Create a fresh record: zero size, current timestamps, unlocked.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        File {
            name: name.into(),
            size: 0,
            created: now,
            modified: now,
            locked: false,
            content: ContentRef::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Update the modification timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
