// tests/common/builders.rs
// テストデータ構築用ヘルパー
use chrono::{Local, TimeZone};
use newer_filter::{FileRecord, FileStat, InMemoryTimestampLookup};

#[allow(dead_code)]
pub fn stat(secs: i64) -> FileStat {
    FileStat::at(Local.timestamp_opt(secs, 0).unwrap())
}

#[allow(dead_code)]
pub fn record(relative: &str, secs: i64) -> FileRecord {
    FileRecord::new(relative, stat(secs))
}

/// Lookup with one destination per `(path, secs)` pair.
#[allow(dead_code)]
pub fn lookup_from(entries: &[(&str, i64)]) -> InMemoryTimestampLookup {
    let mut lookup = InMemoryTimestampLookup::new();
    for (path, secs) in entries {
        lookup.insert(*path, stat(*secs));
    }
    lookup
}

#[allow(dead_code)]
pub fn names(records: &[FileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.relative.as_str()).collect()
}
