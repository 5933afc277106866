//! # Ports
//!
//! Interface definitions for the collaborators around the filter.
//!
//! - [`timestamp`]: Destination timestamp lookup
//! - [`sink`]: Downstream consumer of the filtered records
//!
//! These ports keep the filter itself independent of the filesystem and of
//! whatever pipeline hosts it.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod timestamp;

pub use sink::{FnSink, RecordSink};
pub use timestamp::TimestampLookup;
