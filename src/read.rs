//! Unified read accessor over folders and files
//!
//! A resolver that has walked the namespace to a terminal entry wraps it in a
//! [`ReadContainer`] so downstream consumers (an HTTP range handler, say) use
//! one interface whether the target is a folder listing or file content. The
//! container holds no bytes: file content is pulled through a stream function
//! bound at construction, implemented by the storage-access layer.

use crate::error::{NamespaceError, Result};
use crate::file::File;
use crate::folder::Folder;
use std::io::Write;

/// Discriminates the two container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    Folder,
    File,
}

/// Streams one byte range `[begins, ends)` of a file into the destination.
pub type StreamFn<'a> = Box<dyn Fn(&mut dyn Write, u64, u64) -> Result<()> + 'a>;

/// Read access to a resolved namespace entry.
///
/// Constructed once by the resolver and never mutated afterwards.
pub enum ReadContainer<'a> {
    /// A folder, whose content is its metadata listing.
    Folder(&'a Folder),
    /// A file record with the stream function bound to its content.
    File { meta: &'a File, stream: StreamFn<'a> },
}

impl<'a> ReadContainer<'a> {
    pub fn for_folder(folder: &'a Folder) -> Self {
        ReadContainer::Folder(folder)
    }

    pub fn for_file(meta: &'a File, stream: StreamFn<'a>) -> Self {
        ReadContainer::File { meta, stream }
    }

    pub fn kind(&self) -> ReadKind {
        match self {
            ReadContainer::Folder(_) => ReadKind::Folder,
            ReadContainer::File { .. } => ReadKind::File,
        }
    }

    /// The folder listing, when this wraps a folder.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            ReadContainer::Folder(folder) => Some(folder),
            ReadContainer::File { .. } => None,
        }
    }

    /// The file record, when this wraps a file.
    pub fn as_file(&self) -> Option<&File> {
        match self {
            ReadContainer::File { meta, .. } => Some(meta),
            ReadContainer::Folder(_) => None,
        }
    }

    /// Stream the byte range `[begins, ends)` into `destination`.
    ///
    /// Storage-layer failures pass through verbatim; no retry or buffering
    /// happens here. Requesting bytes from a folder container fails with
    /// `InvalidOperation`.
    pub fn read(&self, destination: &mut dyn Write, begins: u64, ends: u64) -> Result<()> {
        match self {
            ReadContainer::File { stream, .. } => stream(destination, begins, ends),
            ReadContainer::Folder(_) => Err(NamespaceError::InvalidOperation),
        }
    }
}
