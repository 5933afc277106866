use newer_filter_shared_kernel::{FileStat, TimestampField};

/// A source is newer when the destination is absent or strictly older on `field`.
pub fn is_newer(source: &FileStat, destination: Option<&FileStat>, field: TimestampField) -> bool {
    destination.is_none_or(|dest| source.get(field) > dest.get(field))
}
