// crates/ports/src/timestamp.rs
use std::path::Path;

use newer_filter_shared_kernel::{FileStat, Result};

/// Port resolving the timestamps of a destination path.
///
/// `Ok(None)` means the destination does not exist. Any other failure must be
/// reported as an error; the filter treats it as fatal for the session.
pub trait TimestampLookup {
    fn lookup(&self, path: &Path) -> Result<Option<FileStat>>;
}

impl<L: TimestampLookup + ?Sized> TimestampLookup for &L {
    fn lookup(&self, path: &Path) -> Result<Option<FileStat>> {
        (**self).lookup(path)
    }
}

impl<L: TimestampLookup + ?Sized> TimestampLookup for Box<L> {
    fn lookup(&self, path: &Path) -> Result<Option<FileStat>> {
        (**self).lookup(path)
    }
}
