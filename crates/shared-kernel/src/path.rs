use std::path::{Path, PathBuf, is_separator};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Extension of the last path component, including the leading dot.
///
/// Returns an empty string when the name has no dot, when its only dots are
/// leading ones (`.bashrc`, `..`) or when the path is empty. A trailing dot
/// yields `"."`. Trailing separators are ignored.
pub fn extname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    let base = trimmed.rsplit(is_separator).next().unwrap_or(trimmed);
    match base.rfind('.') {
        Some(idx) if !base[..idx].chars().all(|c| c == '.') => &base[idx..],
        _ => "",
    }
}
