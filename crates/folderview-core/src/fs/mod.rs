/// Filesystem enumeration — the only way the core touches the disk.
///
/// [`LazyTreeLoader`](crate::loader::LazyTreeLoader) is generic over the
/// [`FileSystem`] trait so the tree logic can be driven by the real disk
/// ([`LocalFileSystem`]) or by a scripted listing in tests.
///
/// Paths stay as [`PathBuf`] end to end. Names that are not valid Unicode
/// are only converted lossily for display, never for the path handed back
/// to the filesystem.
pub mod local;

pub use local::LocalFileSystem;

use crate::platform::{self, EntryDetails};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failure while listing the contents of a directory.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The directory itself could not be opened (missing, access denied, ...).
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory opened but an entry inside it could not be read.
    #[error("cannot read entry in {}: {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EnumerationError {
    /// The directory whose listing failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::ReadEntry { path, .. } => path,
        }
    }
}

/// Source of volumes and directory listings.
///
/// All paths are absolute. Listings return full paths of the immediate
/// children, in the order the underlying source reports them.
pub trait FileSystem {
    /// Top-level volumes, e.g. `["C:\\", "D:\\"]`. May be empty.
    fn volumes(&self) -> Vec<PathBuf>;

    /// Immediate subdirectories of `path`.
    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError>;

    /// Immediate non-directory entries of `path`.
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError>;

    /// Size, timestamps and flags of a single entry.
    fn entry_details(&self, path: &Path) -> io::Result<EntryDetails> {
        platform::entry_details(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn volumes(&self) -> Vec<PathBuf> {
        (**self).volumes()
    }

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        (**self).list_directories(path)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        (**self).list_files(path)
    }

    fn entry_details(&self, path: &Path) -> io::Result<EntryDetails> {
        (**self).entry_details(path)
    }
}
