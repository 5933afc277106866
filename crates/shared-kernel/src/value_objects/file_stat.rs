// crates/shared-kernel/src/value_objects/file_stat.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Timestamp bundle captured from a source file or its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Content modification time.
    pub mtime: DateTime<Local>,
    /// Status change time.
    pub ctime: DateTime<Local>,
}

impl FileStat {
    pub fn new(mtime: DateTime<Local>, ctime: DateTime<Local>) -> Self {
        Self { mtime, ctime }
    }

    /// Stat whose mtime and ctime are the same instant.
    pub fn at(instant: DateTime<Local>) -> Self {
        Self::new(instant, instant)
    }

    pub fn get(&self, field: TimestampField) -> DateTime<Local> {
        match field {
            TimestampField::Mtime => self.mtime,
            TimestampField::Ctime => self.ctime,
        }
    }
}

/// Which timestamp of a [`FileStat`] governs the newer/older comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampField {
    #[default]
    Mtime,
    Ctime,
}

impl TimestampField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mtime => "mtime",
            Self::Ctime => "ctime",
        }
    }
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mtime" => Ok(Self::Mtime),
            "ctime" => Ok(Self::Ctime),
            other => Err(DomainError::InvalidConfiguration {
                reason: format!("unknown timestamp field: {other}"),
            }),
        }
    }
}
