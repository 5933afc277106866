// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use log::trace;
use newer_filter_ports::TimestampLookup;
use newer_filter_shared_kernel::{FileStat, InfrastructureError, Result};

use crate::platform;

/// Builds a [`FileStat`] from filesystem metadata.
///
/// ctime falls back to mtime when the platform cannot provide one. An mtime
/// outside chrono's range is reported as `InvalidData`.
pub fn stat_from_metadata(metadata: &fs::Metadata) -> io::Result<FileStat> {
    let mtime = platform::to_local_time(metadata.modified()?)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "modification time out of range"))?;
    let ctime = platform::status_change_time(metadata).unwrap_or(mtime);
    Ok(FileStat::new(mtime, ctime))
}

/// Filesystem adapter implementing the `TimestampLookup` port.
///
/// Symlinks are followed by default, so a link to a fresh file counts as
/// fresh. Only `NotFound` is treated as a missing destination.
#[derive(Debug, Clone, Copy)]
pub struct FsTimestampLookup {
    follow_links: bool,
}

impl FsTimestampLookup {
    pub fn new() -> Self {
        Self { follow_links: true }
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl Default for FsTimestampLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampLookup for FsTimestampLookup {
    fn lookup(&self, path: &Path) -> Result<Option<FileStat>> {
        let metadata = if self.follow_links { fs::metadata(path) } else { fs::symlink_metadata(path) };
        match metadata.and_then(|m| stat_from_metadata(&m)) {
            Ok(stat) => Ok(Some(stat)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!("no destination at {}", path.display());
                Ok(None)
            }
            Err(source) => Err(InfrastructureError::Lookup { path: path.to_path_buf(), source }.into()),
        }
    }
}
