//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`manifest`]: reading one field out of a project manifest
//! - [`process`]: running the external version tool
//! - [`notify`]: user-facing report output
//!
//! The use case depends on these traits only, so tests can swap in
//! recording stubs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod manifest;
pub mod notify;
pub mod process;
