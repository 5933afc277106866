// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_record;
pub mod file_stat;

pub use file_record::FileRecord;
pub use file_stat::{FileStat, TimestampField};
