/// A single node in the browsable file tree.
///
/// Nodes live in the flat arena owned by [`FileTree`](super::FileTree) and
/// refer to each other by [`NodeIndex`]. Each node owns the ordered list of
/// its children; no node is ever reachable from two parents.
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// Lightweight index into the arena `Vec<FileNode>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a node represents on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A top-level volume, e.g. `C:\` or `/`.
    Drive,
    Directory,
    File,
}

impl NodeKind {
    /// `true` for drives and directories.
    #[inline]
    pub fn is_container(self) -> bool {
        !matches!(self, Self::File)
    }
}

/// Whether a container's children have been read from disk yet.
///
/// A container starts `Unloaded` and moves to `Loaded` exactly once, on its
/// first expansion. Files are created `Loaded` and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

/// A single drive, directory, or file in the tree.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Text shown in the tree: the volume identifier for drives, the base
    /// name for everything else. Lossy if the name is not valid Unicode.
    pub name: CompactString,

    /// Absolute path, exactly as the filesystem reported it. This is the key
    /// handed back to the filesystem on expansion.
    pub full_path: PathBuf,

    pub kind: NodeKind,

    /// Index of the parent node. `None` for drives.
    pub parent: Option<NodeIndex>,

    /// Children in display order: subdirectories first, then files.
    pub children: Vec<NodeIndex>,

    state: LoadState,
}

impl FileNode {
    /// Create a drive root. Its name and path are both the volume identifier.
    pub fn new_drive(volume: &Path) -> Self {
        Self {
            name: CompactString::new(volume.to_string_lossy()),
            full_path: volume.to_path_buf(),
            kind: NodeKind::Drive,
            parent: None,
            children: Vec::new(),
            state: LoadState::Unloaded,
        }
    }

    /// Create an unloaded directory node.
    pub fn new_dir(name: &str, full_path: PathBuf, parent: Option<NodeIndex>) -> Self {
        Self {
            name: CompactString::new(name),
            full_path,
            kind: NodeKind::Directory,
            parent,
            children: Vec::new(),
            state: LoadState::Unloaded,
        }
    }

    /// Create a leaf file node.
    pub fn new_file(name: &str, full_path: PathBuf, parent: Option<NodeIndex>) -> Self {
        Self {
            name: CompactString::new(name),
            full_path,
            kind: NodeKind::File,
            parent,
            children: Vec::new(),
            state: LoadState::Loaded,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind.is_container()
    }

    #[inline]
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// `true` if this is a container whose contents have not been read yet.
    ///
    /// Such a node is treated as holding a single placeholder child so the
    /// view renders it as expandable.
    #[inline]
    pub fn is_expandable_hint(&self) -> bool {
        self.is_dir() && self.state == LoadState::Unloaded
    }

    /// Alias for [`is_expandable_hint`](Self::is_expandable_hint), named after
    /// the placeholder child it stands in for.
    #[inline]
    pub fn has_placeholder(&self) -> bool {
        self.is_expandable_hint()
    }

    /// Whether the view should draw an expand/collapse arrow for this node.
    #[inline]
    pub fn shows_arrow(&self) -> bool {
        self.is_expandable_hint() || !self.children.is_empty()
    }

    /// One-way transition out of the unloaded state.
    pub(crate) fn mark_loaded(&mut self) {
        self.state = LoadState::Loaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_starts_with_placeholder() {
        let drive = FileNode::new_drive(Path::new("C:\\"));
        assert_eq!(drive.name, "C:\\");
        assert_eq!(drive.full_path, Path::new("C:\\"));
        assert!(drive.has_placeholder());
        assert!(drive.children.is_empty());
    }

    #[test]
    fn files_are_never_expandable() {
        let file = FileNode::new_file("a.txt", "C:\\a.txt".into(), None);
        assert!(!file.is_dir());
        assert!(!file.is_expandable_hint());
        assert!(!file.shows_arrow());
        assert_eq!(file.load_state(), LoadState::Loaded);
    }

    #[test]
    fn loaded_empty_directory_has_no_arrow() {
        let mut dir = FileNode::new_dir("empty", "C:\\empty".into(), None);
        assert!(dir.shows_arrow());
        dir.mark_loaded();
        assert!(!dir.has_placeholder());
        assert!(!dir.shows_arrow());
    }
}
