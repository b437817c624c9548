// tests/common/mod.rs
//! Shared helpers for the CLI tests.

pub mod fake_tool;

#[allow(unused_imports)]
pub use fake_tool::FakeTool;
#[allow(unused_imports)]
pub use temp::Project;
