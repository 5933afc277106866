//! # Use Cases
//!
//! The newer filter session itself.
//!
//! - [`filter`]: Stateful per-record transform with its buffer/passthrough policy
//! - [`stream`]: Iterator adapter driving a filter over an upstream sequence
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod filter;
pub mod stream;

pub use filter::{FilterSummary, NewerFilter, STAGE_NAME};
pub use stream::{NewerExt, NewerStream};
