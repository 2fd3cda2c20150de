/// Top-level volume enumeration.
///
/// On Windows this lists every logical drive root (`C:\`, `D:\`, ...)
/// including removable, optical, and mapped network drives. Elsewhere the
/// filesystem has a single root, `/`.
use std::path::PathBuf;

/// Enumerate the volume roots available on this machine, in the order the
/// operating system reports them.
///
/// Returns an empty vec if the platform call fails; callers treat that as
/// "no drives" rather than an error.
#[cfg(windows)]
pub fn enumerate_volumes() -> Vec<PathBuf> {
    use windows::Win32::Storage::FileSystem::GetLogicalDriveStringsW;

    // GetLogicalDriveStringsW returns null-separated drive root strings. If
    // the buffer is too small it returns the required length instead.
    let mut buffer = vec![0u16; 256];
    let mut len = unsafe { GetLogicalDriveStringsW(Some(buffer.as_mut_slice())) } as usize;
    if len > buffer.len() {
        buffer.resize(len, 0);
        len = unsafe { GetLogicalDriveStringsW(Some(buffer.as_mut_slice())) } as usize;
    }

    if len == 0 || len > buffer.len() {
        tracing::warn!("GetLogicalDriveStringsW returned {len}");
        return Vec::new();
    }

    split_drive_strings(&String::from_utf16_lossy(&buffer[..len]))
}

#[cfg(not(windows))]
pub fn enumerate_volumes() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}

/// Split a `"C:\\\0D:\\\0"` style buffer into individual roots.
#[cfg_attr(not(windows), allow(dead_code))]
fn split_drive_strings(raw: &str) -> Vec<PathBuf> {
    raw.split('\0')
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
