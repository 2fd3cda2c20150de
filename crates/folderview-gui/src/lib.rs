/// FolderView GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. The tree and its loading rules live in
/// `folderview-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod widgets;

pub use app::{FolderViewApp, FolderViewState};
