/// Data model for the FolderView tree.
///
/// Re-exports the arena-allocated tree, its node type, and the helpers used
/// to label nodes for display.
pub mod file_node;
pub mod file_tree;
pub mod path_name;
pub mod size;

pub use file_node::{FileNode, LoadState, NodeIndex, NodeKind};
pub use file_tree::FileTree;
pub use path_name::base_name;
