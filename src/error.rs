//! Error types for namespace operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamespaceError {
    /// Child names must be non-empty single path segments.
    #[error("invalid name {0:?}: must be a non-empty single path segment")]
    InvalidName(String),

    /// A file or folder with this name is already present under the parent.
    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    /// The delete or lookup target is absent.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// A variant-specific accessor was called on the wrong container kind.
    #[error("operation is not valid for this container kind")]
    InvalidOperation,

    /// Failure reported by a storage-layer handler, passed through verbatim.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NamespaceError>;
