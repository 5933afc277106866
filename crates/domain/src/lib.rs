//! # Domain
//!
//! Configuration and decision rules of the newer filter: how a destination
//! path is derived from a source record and when a source counts as newer.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod destination;
pub mod freshness;

pub use config::{NewerConfig, NewerOptions, PathMapper};
pub use freshness::is_newer;
