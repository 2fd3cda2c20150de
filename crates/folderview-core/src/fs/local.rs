/// [`FileSystem`] implementation backed by the real disk.
use super::{EnumerationError, FileSystem};
use crate::platform;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads volumes from the platform and listings via `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Which half of a directory listing to collect.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryFilter {
    Directories,
    Files,
}

impl FileSystem for LocalFileSystem {
    fn volumes(&self) -> Vec<PathBuf> {
        platform::enumerate_volumes()
    }

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        list_entries(path, EntryFilter::Directories)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, EnumerationError> {
        list_entries(path, EntryFilter::Files)
    }
}

/// Read one level of `path` and keep the entries matching `filter`.
///
/// Any failure, whether opening the directory or reading one of its
/// entries, fails the whole listing. Entry paths come straight from
/// `read_dir`, so names that are not valid Unicode still round-trip.
fn list_entries(path: &Path, filter: EntryFilter) -> Result<Vec<PathBuf>, EnumerationError> {
    let read_dir = fs::read_dir(path).map_err(|source| EnumerationError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| EnumerationError::ReadEntry {
            path: path.to_path_buf(),
            source,
        })?;
        let file_type = entry
            .file_type()
            .map_err(|source| EnumerationError::ReadEntry {
                path: path.to_path_buf(),
                source,
            })?;

        // Symlinks are classified by their target. A dangling link has no
        // target to descend into and is listed as a file.
        let entry_path = entry.path();
        let is_dir = if file_type.is_symlink() {
            fs::metadata(&entry_path).is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };

        let wanted = match filter {
            EntryFilter::Directories => is_dir,
            EntryFilter::Files => !is_dir,
        };
        if wanted {
            out.push(entry_path);
        }
    }

    Ok(out)
}
