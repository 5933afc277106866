// crates/shared-kernel/src/value_objects/file_record.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult, FileStat};

/// One candidate source file flowing through the filter.
///
/// `relative` is the path below whatever root the upstream producer walked and
/// is what the destination path is derived from. `path` is carried through
/// untouched for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub relative: String,
    pub stat: Option<FileStat>,
}

impl FileRecord {
    /// Record whose source path equals its relative path.
    pub fn new(relative: impl Into<String>, stat: FileStat) -> Self {
        let relative = relative.into();
        Self { path: PathBuf::from(&relative), relative, stat: Some(stat) }
    }

    /// Record with no timestamp information attached.
    pub fn without_stat(relative: impl Into<String>) -> Self {
        let relative = relative.into();
        Self { path: PathBuf::from(&relative), relative, stat: None }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.path
    }

    /// Returns the stat bundle, or `InvalidInput` when the producer sent none.
    pub fn require_stat(&self) -> DomainResult<&FileStat> {
        self.stat.as_ref().ok_or_else(|| DomainError::InvalidInput {
            path: self.relative.clone(),
            reason: "expected a source file with stats".to_string(),
        })
    }
}
