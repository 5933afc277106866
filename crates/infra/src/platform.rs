// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Status-change time has no portable accessor in `std::fs::Metadata`; this
//! module keeps the conditional compilation for it in one place.

use std::{
    fs::Metadata,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local};

/// Converts a `SystemTime` to local time, or `None` when chrono cannot represent it.
pub fn to_local_time(time: SystemTime) -> Option<DateTime<Local>> {
    let utc = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => DateTime::from_timestamp(i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())?,
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => DateTime::from_timestamp(-secs, 0)?,
                nanos => DateTime::from_timestamp(secs.checked_neg()?.checked_sub(1)?, 1_000_000_000 - nanos)?,
            }
        }
    };
    Some(utc.with_timezone(&Local))
}

/// Status change time (`st_ctime`) of a file.
#[cfg(unix)]
pub fn status_change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).ok()?;
    DateTime::from_timestamp(metadata.ctime(), nanos).map(|utc| utc.with_timezone(&Local))
}

/// Creation time stands in for ctime where the platform has no status-change time.
#[cfg(not(unix))]
pub fn status_change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.created().ok().and_then(to_local_time)
}
