/// Display-name extraction for full paths.
///
/// Both `/` and `\` count as separators so paths produced on either family
/// of platform (or a mix of the two) yield the same name.

/// Return the file or folder name at the end of `path`.
///
/// - Empty input returns an empty string.
/// - If there is no separator, or the last separator is the very first
///   character (e.g. `\foo`), the input is returned unchanged.
/// - Otherwise the text after the last separator is returned. A trailing
///   separator therefore yields an empty name.
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return path;
    }

    // Treating `/` as `\` is the same as normalising first. Both are
    // single-byte, so `last + 1` is always a char boundary.
    match path.rfind(|c: char| c == '\\' || c == '/') {
        None | Some(0) => path,
        Some(last) => &path[last + 1..],
    }
}
