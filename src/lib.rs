//! # dfs-namespace — head-node metadata core
//!
//! In-memory hierarchical namespace for a distributed filesystem: the folder
//! and file metadata tree a head node keeps authoritative while the actual
//! bytes live on data nodes.
//!
//! - **Lazy subtree references**: child folders are held as lightweight
//!   name/path shadows, resolved on demand through a path-keyed lookup
//! - **Storage-first mutation**: create/delete validate locally, commit to
//!   backing storage through an injected handler, and only then touch the
//!   in-memory tree — a visible child is always a durable child
//! - **Unified reads**: one [`ReadContainer`] accessor for "folder listing"
//!   and "file byte range" targets
//! - **External locking**: entities are single-writer by contract; a
//!   [`PathLocks`] table supplies the per-path critical sections
//!
//! ## Quick Start
//!
//! ```rust
//! use dfs_namespace::{Folder, Result};
//!
//! # fn main() -> Result<()> {
//! let mut root = Folder::new("/");
//!
//! // Commit handlers talk to the storage layer; this one always succeeds.
//! root.create_folder("projects", |_shadow| Ok(()))?;
//! root.create_file("notes.txt")?;
//!
//! assert_eq!(root.folder_path("projects").as_deref(), Some("/projects"));
//! assert_eq!(root.file("notes.txt").map(|f| f.size), Some(0));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod folder;
pub mod locks;
pub mod path;
pub mod read;
pub mod wire;

// Re-export commonly used types
pub use error::{NamespaceError, Result};
pub use file::{ContentRef, File};
pub use folder::{Folder, FolderShadow};
pub use locks::PathLocks;
pub use read::{ReadContainer, ReadKind, StreamFn};
pub use wire::{ErrorEnvelope, UNKNOWN_ERROR_CODE};
