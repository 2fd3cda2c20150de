/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The tree
/// itself is owned by the [`LazyTreeLoader`]; this module keeps the flat
/// list of rows currently on screen in step with it.
///
/// Everything runs on the UI thread. Expanding a folder reads the disk
/// synchronously inside [`AppState::toggle_expand`], and the selected
/// entry's metadata is read once when the selection changes. Drawing a
/// frame never touches the disk.
use folderview_core::fs::{FileSystem, LocalFileSystem};
use folderview_core::loader::{Expansion, LazyTreeLoader};
use folderview_core::model::{FileNode, FileTree, NodeIndex};
use folderview_core::platform::EntryDetails;
use std::path::Path;

/// A row in the flattened visible-rows list for the virtualised TreeView.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// Index into the `FileTree` arena.
    pub node_index: NodeIndex,
    /// Nesting depth (0 = drive).
    pub depth: u16,
    /// Whether this container is currently expanded (meaningless for files).
    pub is_expanded: bool,
}

/// Height of each tree row in pixels. Shared by the tree view and the
/// scroll-to-row logic.
pub const ROW_HEIGHT: f32 = 24.0;

/// Maximum rows in the virtualised tree-view visible-rows list.
///
/// Opening a folder with an enormous number of entries inserts only as many
/// rows as fit under this cap.
pub const MAX_VISIBLE_ROWS: usize = 500_000;

/// All application state.
pub struct AppState<F: FileSystem = LocalFileSystem> {
    // ── Tree ───────────────────────────────────────────
    pub loader: LazyTreeLoader<F>,
    pub visible_rows: Vec<VisibleRow>,
    selected_node: Option<NodeIndex>,
    /// Metadata of the selected node. `None` when nothing is selected or
    /// the entry could not be read.
    selected_details: Option<EntryDetails>,
    /// Scroll target requested by keyboard navigation, consumed by the view.
    pub scroll_to_row: Option<usize>,

    // ── UI state ───────────────────────────────────────
    pub show_about: bool,
    pub show_details: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state from the real disk.
    pub fn new() -> Self {
        Self::with_file_system(LocalFileSystem::new())
    }
}

impl<F: FileSystem> AppState<F> {
    /// Create state over any filesystem, loading its drive roots.
    pub fn with_file_system(fs: F) -> Self {
        let loader = LazyTreeLoader::with_roots(fs);
        let mut state = Self {
            loader,
            visible_rows: Vec::new(),
            selected_node: None,
            selected_details: None,
            scroll_to_row: None,
            show_about: false,
            show_details: true,
            dark_mode: true,
        };
        state.build_root_rows();
        state
    }

    /// The tree being browsed.
    #[inline]
    pub fn tree(&self) -> &FileTree {
        self.loader.tree()
    }

    #[inline]
    pub fn selected_node(&self) -> Option<NodeIndex> {
        self.selected_node
    }

    /// The currently selected node, if any.
    pub fn selected(&self) -> Option<&FileNode> {
        self.selected_node.and_then(|n| self.tree().get(n))
    }

    /// Full path of the selected node.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected().map(|n| n.full_path.as_path())
    }

    /// Metadata read when the current node was selected.
    pub fn selected_details(&self) -> Option<&EntryDetails> {
        self.selected_details.as_ref()
    }

    /// Change the selection, reading the new node's metadata once.
    fn set_selection(&mut self, node: Option<NodeIndex>) {
        if self.selected_node == node {
            return;
        }
        self.selected_node = node;
        let details = self.selected().and_then(|n| {
            match self.loader.file_system().entry_details(&n.full_path) {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!("No metadata for {}: {}", n.full_path.display(), e);
                    None
                }
            }
        });
        self.selected_details = details;
    }

    /// Position of `node` in the visible rows, if it is on screen.
    pub fn row_of(&self, node: NodeIndex) -> Option<usize> {
        self.visible_rows.iter().position(|r| r.node_index == node)
    }

    /// Reset the visible rows to one collapsed row per drive.
    fn build_root_rows(&mut self) {
        self.visible_rows.clear();
        let roots = &self.loader.tree().roots;
        self.visible_rows
            .extend(roots.iter().take(MAX_VISIBLE_ROWS).map(|&root| VisibleRow {
                node_index: root,
                depth: 0,
                is_expanded: false,
            }));
    }

    /// Select the node shown at `row_index`.
    pub fn select_row(&mut self, row_index: usize) {
        if let Some(row) = self.visible_rows.get(row_index) {
            self.set_selection(Some(row.node_index));
        }
    }

    /// Toggle expansion of the container at `row_index`.
    ///
    /// Expanding reads the folder from disk the first time only; collapsing
    /// just hides the rows, so re-opening shows the same children without
    /// touching the disk again.
    pub fn toggle_expand(&mut self, row_index: usize) {
        let Some(row) = self.visible_rows.get(row_index) else {
            return;
        };
        if row.is_expanded {
            self.collapse_row(row_index);
        } else {
            self.expand_row(row_index);
        }
    }

    /// Expand the row if it is a collapsed container. No-op otherwise.
    pub fn expand_row(&mut self, row_index: usize) {
        let Some(row) = self.visible_rows.get(row_index) else {
            return;
        };
        let node_idx = row.node_index;
        if row.is_expanded || !self.loader.tree().node(node_idx).is_dir() {
            return;
        }
        let child_depth = row.depth + 1;

        if let Expansion::Loaded { directories, files } = self.loader.expand(node_idx) {
            tracing::debug!(
                "Opened {} ({} folders, {} files)",
                self.loader.tree().node(node_idx).full_path.display(),
                directories,
                files
            );
        }

        // Insert children immediately after this row, respecting the cap.
        let headroom = MAX_VISIBLE_ROWS.saturating_sub(self.visible_rows.len());
        let new_rows: Vec<VisibleRow> = self
            .loader
            .tree()
            .children(node_idx)
            .iter()
            .take(headroom)
            .map(|&child| VisibleRow {
                node_index: child,
                depth: child_depth,
                is_expanded: false,
            })
            .collect();

        let insert_pos = row_index + 1;
        self.visible_rows.splice(insert_pos..insert_pos, new_rows);
        self.visible_rows[row_index].is_expanded = true;
    }

    /// Collapse the row, removing all descendant rows that follow it.
    pub fn collapse_row(&mut self, row_index: usize) {
        let Some(row) = self.visible_rows.get(row_index) else {
            return;
        };
        if !row.is_expanded {
            return;
        }
        let parent_depth = row.depth;
        let remove_start = row_index + 1;
        let mut remove_end = remove_start;
        while remove_end < self.visible_rows.len()
            && self.visible_rows[remove_end].depth > parent_depth
        {
            remove_end += 1;
        }
        self.visible_rows.drain(remove_start..remove_end);
        self.visible_rows[row_index].is_expanded = false;

        // A selection hidden by the collapse moves up to the collapsed row.
        if let Some(sel) = self.selected_node {
            if self.row_of(sel).is_none() {
                self.set_selection(Some(self.visible_rows[row_index].node_index));
            }
        }
    }

    /// Collapse everything back to the drive list. Loaded folders stay
    /// loaded.
    pub fn collapse_all(&mut self) {
        self.build_root_rows();
        if let Some(sel) = self.selected_node {
            if self.row_of(sel).is_none() {
                self.set_selection(self.drive_of(sel));
            }
        }
    }

    /// The drive root above `node`.
    fn drive_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        let tree = self.loader.tree();
        let mut cursor = tree.get(node).map(|_| node)?;
        while let Some(parent) = tree.node(cursor).parent {
            cursor = parent;
        }
        Some(cursor)
    }

    // ── Keyboard navigation ────────────────────────────────────────────

    /// Move the selection up or down by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_rows.is_empty() {
            return;
        }
        let current = self
            .selected_node
            .and_then(|n| self.row_of(n))
            .map(|r| r as isize)
            .unwrap_or(-1);
        let last = self.visible_rows.len() as isize - 1;
        let target = (current + delta).clamp(0, last) as usize;
        self.select_row(target);
        self.scroll_to_row = Some(target);
    }

    /// Right arrow: open a collapsed folder, or step into its first child.
    pub fn expand_selected(&mut self) {
        let Some(row) = self.selected_node.and_then(|n| self.row_of(n)) else {
            return;
        };
        if self.visible_rows[row].is_expanded {
            if self
                .visible_rows
                .get(row + 1)
                .is_some_and(|next| next.depth > self.visible_rows[row].depth)
            {
                self.select_row(row + 1);
                self.scroll_to_row = Some(row + 1);
            }
        } else {
            self.expand_row(row);
        }
    }

    /// Left arrow: close an open folder, or step out to the parent.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_node.and_then(|n| self.row_of(n)) else {
            return;
        };
        if self.visible_rows[row].is_expanded {
            self.collapse_row(row);
        } else if let Some(parent) = self.tree().node(self.visible_rows[row].node_index).parent {
            if let Some(parent_row) = self.row_of(parent) {
                self.set_selection(Some(parent));
                self.scroll_to_row = Some(parent_row);
            }
        }
    }
}
