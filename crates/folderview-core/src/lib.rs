/// FolderView Core — the lazily-populated file tree and its data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// The GUI crate drives it by calling [`loader::LazyTreeLoader::expand`]
/// whenever the user opens a folder.
///
/// # Modules
///
/// - [`model`] — Arena-allocated file tree, node types, and display helpers.
/// - [`fs`] — The `FileSystem` trait and its real-disk implementation.
/// - [`loader`] — One-level-at-a-time expansion of drives and folders.
/// - [`platform`] — Volume enumeration, entry metadata, file-manager hand-off.
pub mod fs;
pub mod loader;
pub mod model;
pub mod platform;

pub use fs::{EnumerationError, FileSystem, LocalFileSystem};
pub use loader::{Expansion, LazyTreeLoader};
