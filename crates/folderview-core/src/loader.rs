/// Lazy, one-level-at-a-time population of the file tree.
///
/// Drives are listed once up front, each marked unloaded so the view shows
/// an expand arrow. A container's contents are read from the
/// [`FileSystem`] only when the user first expands it: subdirectories are
/// appended first (each unloaded in turn), then files as leaves. After that
/// the node is loaded for the rest of the session and further expansions
/// are no-ops.
///
/// Listing failures are absorbed where they happen. An unreadable folder
/// simply shows up empty, and a failed subdirectory listing does not stop
/// the file listing from being attempted.
use crate::fs::FileSystem;
use crate::model::{base_name, FileNode, FileTree, NodeIndex};
use tracing::{debug, info};

/// What a call to [`LazyTreeLoader::expand`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// The node's contents were read and appended.
    Loaded { directories: usize, files: usize },
    /// Nothing happened: the node was already loaded, or is a file.
    Skipped,
}

/// Owns the tree and the filesystem it is populated from.
pub struct LazyTreeLoader<F: FileSystem> {
    fs: F,
    tree: FileTree,
}

impl<F: FileSystem> LazyTreeLoader<F> {
    /// Create a loader with an empty tree. Call [`load_roots`](Self::load_roots)
    /// to populate the drives.
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            tree: FileTree::new(),
        }
    }

    /// Create a loader and immediately load the drive roots.
    pub fn with_roots(fs: F) -> Self {
        let mut loader = Self::new(fs);
        loader.load_roots();
        loader
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Add one unloaded root per volume, in the order the filesystem
    /// reports them, and return the root indices.
    ///
    /// Roots live for the whole session: once loaded, later calls return the
    /// existing roots without asking the filesystem again.
    pub fn load_roots(&mut self) -> &[NodeIndex] {
        if !self.tree.roots.is_empty() {
            debug!("Roots already loaded, keeping {}", self.tree.roots.len());
            return &self.tree.roots;
        }

        for volume in self.fs.volumes() {
            self.tree.add_root(&volume);
        }
        info!("Loaded {} drive roots", self.tree.roots.len());
        &self.tree.roots
    }

    /// Read the contents of an unloaded container.
    ///
    /// Returns [`Expansion::Skipped`] without touching the filesystem if the
    /// node is a file, has already been loaded, or is not in this tree.
    pub fn expand(&mut self, node: NodeIndex) -> Expansion {
        if !self.tree.get(node).is_some_and(|n| n.is_expandable_hint()) {
            return Expansion::Skipped;
        }

        // The placeholder goes away before anything is read, so a node whose
        // listings both fail still ends up loaded (and empty).
        self.tree.node_mut(node).mark_loaded();
        let path = self.tree.node(node).full_path.clone();

        let dirs = self.fs.list_directories(&path).unwrap_or_else(|e| {
            debug!("Listing subdirectories of {} failed: {}", path.display(), e);
            Vec::new()
        });
        let directories = dirs.len();
        for dir in dirs {
            let name = base_name(&dir.to_string_lossy()).to_owned();
            self.tree
                .push_child(node, FileNode::new_dir(&name, dir, Some(node)));
        }

        let file_paths = self.fs.list_files(&path).unwrap_or_else(|e| {
            debug!("Listing files of {} failed: {}", path.display(), e);
            Vec::new()
        });
        let files = file_paths.len();
        for file in file_paths {
            let name = base_name(&file.to_string_lossy()).to_owned();
            self.tree
                .push_child(node, FileNode::new_file(&name, file, Some(node)));
        }

        debug!(
            "Expanded {}: {} directories, {} files",
            path.display(),
            directories,
            files
        );
        Expansion::Loaded { directories, files }
    }
}
