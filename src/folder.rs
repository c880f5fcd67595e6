//! Folder entities and the namespace mutation protocol
//!
//! A [`Folder`] represents one directory level of the namespace tree the head
//! node keeps in memory. Child folders are held as lightweight
//! [`FolderShadow`] references so deep trees are never loaded wholesale;
//! resolving a shadow to its full `Folder` is the tree-walking layer's job,
//! through a path-keyed lookup.
//!
//! Mutations follow a strict two-phase discipline: validate locally, commit
//! to backing storage through a caller-supplied handler, and only then touch
//! the in-memory collections. A reader that observes a child is therefore
//! guaranteed that child is durable, and a failed commit leaves the folder
//! exactly as it was.
//!
//! The entities carry no internal locking; the host process owns the
//! critical-section boundary (see [`crate::locks`]).

use crate::error::{NamespaceError, Result};
use crate::file::File;
use crate::path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Lightweight, ordered reference to a child folder.
///
/// Holds only the child's leaf name and full path, never its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderShadow {
    pub name: String,
    pub full: String,
}

impl FolderShadow {
    pub fn new(folder_path: &str) -> Self {
        let full = path::normalize(folder_path);
        let (_, name) = path::split(&full);
        FolderShadow { name, full }
    }
}

impl PartialOrd for FolderShadow {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FolderShadow {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.full.cmp(&other.full))
    }
}

/// One directory level of the namespace tree.
///
/// Owns its direct [`File`] records outright and [`FolderShadow`] references
/// to child folders. Both collections are kept sorted by name, and no file
/// and folder may share a name under the same parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub full: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    folders: Vec<FolderShadow>,
    files: Vec<File>,
}

impl Folder {
    /// Materialize an empty folder at the given absolute path.
    pub fn new(folder_path: &str) -> Self {
        let full = path::normalize(folder_path);
        let (_, name) = path::split(&full);
        let now = Utc::now();

        Folder {
            full,
            name,
            created: now,
            modified: now,
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Child folder references, sorted by name.
    pub fn folders(&self) -> &[FolderShadow] {
        &self.folders
    }

    /// Direct file records, sorted by name.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Create a direct child folder.
    ///
    /// `commit` performs the durable creation in backing storage and runs
    /// strictly before the shadow is linked in, so a handler failure leaves
    /// this folder untouched.
    pub fn create_folder<F>(&mut self, name: &str, commit: F) -> Result<()>
    where
        F: FnOnce(&FolderShadow) -> Result<()>,
    {
        let name = self.validate_child_name(name)?;

        let shadow = FolderShadow::new(&path::join(&self.full, &name));
        commit(&shadow)?;

        debug!(parent = %self.full, child = %shadow.full, "linked child folder");
        let idx = match self.folders.binary_search_by(|s| s.name.as_str().cmp(&name)) {
            Ok(i) | Err(i) => i,
        };
        self.folders.insert(idx, shadow);

        Ok(())
    }

    /// Reserve a file record at this level.
    ///
    /// Content arrives later through the streaming path; the fresh record has
    /// zero size, current timestamps, and is unlocked. No storage handler is
    /// involved here, only the metadata slot is taken.
    pub fn create_file(&mut self, name: &str) -> Result<&mut File> {
        let name = self.validate_child_name(name)?;

        debug!(parent = %self.full, file = %name, "reserved file record");
        let idx = match self.files.binary_search_by(|f| f.name().cmp(&name)) {
            Ok(i) | Err(i) => i,
        };
        self.files.insert(idx, File::new(name));

        Ok(&mut self.files[idx])
    }

    /// Full path of the direct child folder `name`, if present.
    pub fn folder_path(&self, name: &str) -> Option<String> {
        self.folders
            .binary_search_by(|s| s.name.as_str().cmp(name))
            .ok()
            .map(|i| self.folders[i].full.clone())
    }

    /// The direct file record named `name`, if present.
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files
            .binary_search_by(|f| f.name().cmp(name))
            .ok()
            .map(|i| &self.files[i])
    }

    /// Mutable access to a direct file record, e.g. to flip its lock state
    /// or finalize an upload.
    pub fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        match self.files.binary_search_by(|f| f.name().cmp(name)) {
            Ok(i) => Some(&mut self.files[i]),
            Err(_) => None,
        }
    }

    /// Upsert or remove a file record.
    ///
    /// With `Some(file)` the record replaces any existing entry named `name`,
    /// or is appended as a new entry; with `None` the entry named `name` is
    /// removed. Sorted order is preserved either way. This single primitive
    /// supports both finalizing an upload and dropping a file record.
    pub fn replace_file(&mut self, name: &str, file: Option<File>) {
        if let Ok(idx) = self.files.binary_search_by(|f| f.name().cmp(name)) {
            self.files.remove(idx);
        }

        if let Some(file) = file {
            match self.files.binary_search_by(|f| f.name().cmp(file.name())) {
                Ok(i) => self.files[i] = file,
                Err(i) => self.files.insert(i, file),
            }
        }
    }

    /// Delete a direct child folder.
    ///
    /// `commit` receives the child's full path and recursively removes the
    /// subtree from backing storage; the shadow is unlinked only after it
    /// succeeds.
    pub fn delete_folder<F>(&mut self, name: &str, commit: F) -> Result<()>
    where
        F: FnOnce(&str) -> Result<()>,
    {
        let idx = self
            .folders
            .binary_search_by(|s| s.name.as_str().cmp(name))
            .map_err(|_| NamespaceError::NotFound(path::join(&self.full, name)))?;

        commit(&self.folders[idx].full)?;

        let shadow = self.folders.remove(idx);
        debug!(parent = %self.full, child = %shadow.full, "unlinked child folder");

        Ok(())
    }

    /// Delete a direct file record.
    ///
    /// `commit` receives the record and removes its durable content; the
    /// entry is dropped only after it succeeds.
    pub fn delete_file<F>(&mut self, name: &str, commit: F) -> Result<()>
    where
        F: FnOnce(&File) -> Result<()>,
    {
        let idx = self
            .files
            .binary_search_by(|f| f.name().cmp(name))
            .map_err(|_| NamespaceError::NotFound(path::join(&self.full, name)))?;

        commit(&self.files[idx])?;

        self.files.remove(idx);
        debug!(parent = %self.full, file = %name, "removed file record");

        Ok(())
    }

    /// Total bytes under this level.
    ///
    /// Direct file sizes are summed locally; descendant sizes come from
    /// `aggregate`, which resolves the child shadows through the
    /// tree-walking layer. The aggregator is only consulted when child
    /// folders exist.
    pub fn size<F>(&self, aggregate: F) -> u64
    where
        F: FnOnce(&[FolderShadow]) -> u64,
    {
        let direct: u64 = self.files.iter().map(|f| f.size).sum();

        if self.folders.is_empty() {
            direct
        } else {
            direct + aggregate(&self.folders)
        }
    }

    /// Snapshot this folder's listing into `target`.
    ///
    /// File records are deep-copied so the snapshot shares no mutable state
    /// with the source; folder shadows are immutable references and are
    /// copied as-is. `target`'s previous listing is discarded.
    pub fn clone_files_into(&self, target: &mut Folder) {
        target.folders = self.folders.clone();
        target.files = self.files.clone();
    }

    /// True while any direct file is locked by an in-flight write.
    pub fn is_locked(&self) -> bool {
        self.files.iter().any(|f| f.locked)
    }

    /// Normalize a child name and check it against both child collections.
    fn validate_child_name(&self, raw: &str) -> Result<String> {
        let name = path::normalize(raw)[1..].to_string();

        if name.is_empty() || name.contains(path::SEPARATOR) {
            return Err(NamespaceError::InvalidName(raw.to_string()));
        }

        if self.exists(&name) {
            return Err(NamespaceError::AlreadyExists(path::join(&self.full, &name)));
        }

        Ok(name)
    }

    fn exists(&self, name: &str) -> bool {
        self.file(name).is_some() || self.folder_path(name).is_some()
    }
}
