/// Arena-backed file tree that grows one directory level at a time.
///
/// All nodes live in a single `Vec<FileNode>`. Nodes are only ever appended;
/// nothing is evicted during a session, so a `NodeIndex` stays valid for the
/// lifetime of the tree.
use super::file_node::{FileNode, NodeIndex};
use std::path::Path;

/// The browsable tree: drive roots plus everything expanded beneath them.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Arena: every node in a flat vector.
    pub nodes: Vec<FileNode>,

    /// Drive roots in enumeration order.
    pub roots: Vec<NodeIndex>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new node in the arena and return its index.
    fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Add a drive root, appended after any existing roots.
    pub fn add_root(&mut self, volume: &Path) -> NodeIndex {
        let idx = self.add_node(FileNode::new_drive(volume));
        self.roots.push(idx);
        idx
    }

    /// Append `child` to the end of `parent`'s children.
    ///
    /// The child's `parent` field is overwritten so the link is always
    /// consistent in both directions.
    pub fn push_child(&mut self, parent: NodeIndex, mut child: FileNode) -> NodeIndex {
        child.parent = Some(parent);
        let idx = self.add_node(child);
        self.nodes[parent.idx()].children.push(idx);
        idx
    }

    /// Direct children of a node, in display order.
    #[inline]
    pub fn children(&self, parent: NodeIndex) -> &[NodeIndex] {
        &self.nodes[parent.idx()].children
    }

    /// Display names of a node's direct children, in order.
    pub fn child_names(&self, parent: NodeIndex) -> Vec<&str> {
        self.children(parent)
            .iter()
            .map(|&c| self.nodes[c.idx()].name.as_str())
            .collect()
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut FileNode {
        &mut self.nodes[index.idx()]
    }

    /// Look up a node by index, returning `None` for stale or foreign indices.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&FileNode> {
        self.nodes.get(index.idx())
    }

    /// Find the first node whose full path equals `path`.
    pub fn find_by_path(&self, path: impl AsRef<Path>) -> Option<NodeIndex> {
        let path = path.as_ref();
        self.nodes
            .iter()
            .position(|n| n.full_path == path)
            .map(NodeIndex::new)
    }

    /// Number of containers whose contents have been read.
    pub fn loaded_dir_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.is_dir() && !n.is_expandable_hint())
            .count()
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
