/// On-demand metadata for a single entry, shown in the details panel.
///
/// Read when an entry is selected rather than stored on the tree node, so the
/// tree itself never goes stale on size or timestamps.
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Metadata for one file, directory, or drive root.
#[derive(Debug, Clone)]
pub struct EntryDetails {
    /// Logical size in bytes. Directories report what the OS reports for the
    /// directory entry itself, not the size of their contents.
    pub size: u64,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub readonly: bool,
    pub modified: Option<DateTime<Local>>,
    pub created: Option<DateTime<Local>>,
}

impl EntryDetails {
    /// `modified` formatted for display, or "unknown".
    pub fn modified_display(&self) -> String {
        format_timestamp(self.modified)
    }

    pub fn created_display(&self) -> String {
        format_timestamp(self.created)
    }
}

fn format_timestamp(ts: Option<DateTime<Local>>) -> String {
    match ts {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_owned(),
    }
}

/// Read metadata for `path`. Symlinks are followed for size and type.
pub fn entry_details(path: impl AsRef<Path>) -> std::io::Result<EntryDetails> {
    let path = path.as_ref();
    let link_meta = fs::symlink_metadata(path)?;
    let meta = if link_meta.file_type().is_symlink() {
        fs::metadata(path).unwrap_or_else(|_| link_meta.clone())
    } else {
        link_meta.clone()
    };

    Ok(EntryDetails {
        size: meta.len(),
        is_dir: meta.is_dir(),
        is_symlink: link_meta.file_type().is_symlink(),
        readonly: meta.permissions().readonly(),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
        created: meta.created().ok().map(DateTime::<Local>::from),
    })
}
