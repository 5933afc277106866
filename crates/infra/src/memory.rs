use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use newer_filter_ports::TimestampLookup;
use newer_filter_shared_kernel::{FileStat, InfrastructureError, Result};

#[derive(Debug, Clone, Copy)]
enum Entry {
    Present(FileStat),
    Failing(io::ErrorKind),
}

/// Lookup backed by a map, for hosts that track destinations themselves.
///
/// Paths are matched exactly as the filter derives them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTimestampLookup {
    entries: HashMap<PathBuf, Entry>,
}

impl InMemoryTimestampLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, stat: FileStat) -> &mut Self {
        self.entries.insert(path.into(), Entry::Present(stat));
        self
    }

    /// Makes lookups of `path` fail with `kind`.
    pub fn fail(&mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> &mut Self {
        self.entries.insert(path.into(), Entry::Failing(kind));
        self
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TimestampLookup for InMemoryTimestampLookup {
    fn lookup(&self, path: &Path) -> Result<Option<FileStat>> {
        match self.entries.get(path) {
            Some(Entry::Present(stat)) => Ok(Some(*stat)),
            Some(Entry::Failing(io::ErrorKind::NotFound)) | None => Ok(None),
            Some(Entry::Failing(kind)) => {
                Err(InfrastructureError::Lookup { path: path.to_path_buf(), source: io::Error::from(*kind) }.into())
            }
        }
    }
}
