//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load the version, report it, then drive the
//!   external tool through its set/commit pair
//!
//! Use cases depend on the domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::SyncVersion;
