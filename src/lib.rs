//! Streaming filter that forwards only source files newer than their
//! destination counterparts.
//!
//! ```no_run
//! use newer_filter::{FileRecord, NewerOptions, newer};
//!
//! let mut filter = newer(NewerOptions::from("dist").ext(".js"))?;
//! let mut passed: Vec<FileRecord> = Vec::new();
//! for record in std::iter::empty::<FileRecord>() {
//!     filter.process(record, &mut passed)?;
//! }
//! let summary = filter.finish();
//! # let _ = summary;
//! # Ok::<(), newer_filter::NewerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use newer_filter_domain::{NewerConfig, NewerOptions, PathMapper, is_newer};
pub use newer_filter_infra::{FsTimestampLookup, InMemoryTimestampLookup, record_from_path};
pub use newer_filter_ports::{FnSink, RecordSink, TimestampLookup};
pub use newer_filter_shared_kernel::{
    ApplicationError, DomainError, ErrorContext, FileRecord, FileStat, InfrastructureError, NewerError, Result,
    TimestampField, path::extname,
};
pub use newer_filter_usecase::{FilterSummary, NewerExt, NewerFilter, NewerStream, STAGE_NAME};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter checking destinations on the local filesystem.
pub fn newer(options: impl Into<NewerOptions>) -> Result<NewerFilter<FsTimestampLookup>> {
    NewerFilter::new(options, FsTimestampLookup::new())
}
