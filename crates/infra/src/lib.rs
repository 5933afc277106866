// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod memory;
pub mod platform;
pub mod source;

pub use filesystem::{FsTimestampLookup, stat_from_metadata};
pub use memory::InMemoryTimestampLookup;
pub use source::record_from_path;
