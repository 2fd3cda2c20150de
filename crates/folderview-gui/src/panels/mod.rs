/// Panels composed by the main window.

pub mod details_panel;
pub mod tree_panel;
