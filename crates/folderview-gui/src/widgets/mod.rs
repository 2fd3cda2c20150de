/// UI widgets for FolderView.

pub mod status_bar;
pub mod toolbar;
pub mod tree_view;
