/// Platform-specific functionality — volume enumeration, per-entry
/// metadata, and file-manager integration.

pub mod details;
pub mod shell;
pub mod volumes;

pub use details::{entry_details, EntryDetails};
pub use shell::reveal_in_file_manager;
pub use volumes::enumerate_volumes;
