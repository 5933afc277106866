use std::{fs, path::Path};

use newer_filter_shared_kernel::{
    DomainError, FileRecord, InfrastructureError, Result, path::logical_absolute,
};

use crate::filesystem::stat_from_metadata;

/// Reads `path` from disk into a [`FileRecord`] relative to `root`.
///
/// Both paths are made absolute against the working directory first. The
/// relative part must be valid UTF-8 since extension substitution works on
/// text.
pub fn record_from_path(root: &Path, path: &Path) -> Result<FileRecord> {
    let root = logical_absolute(root);
    let absolute = logical_absolute(path);

    let stat = fs::metadata(&absolute)
        .and_then(|m| stat_from_metadata(&m))
        .map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "stat".to_string(),
            path: absolute.clone(),
            source,
        })?;

    let relative = absolute.strip_prefix(&root).map_err(|_| DomainError::InvalidInput {
        path: absolute.display().to_string(),
        reason: format!("not under root '{}'", root.display()),
    })?;
    let relative = relative
        .to_str()
        .ok_or_else(|| DomainError::InvalidInput {
            path: absolute.display().to_string(),
            reason: "relative path is not valid UTF-8".to_string(),
        })?
        .to_string();

    Ok(FileRecord { path: absolute, relative, stat: Some(stat) })
}
