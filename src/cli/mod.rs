//! Workflow entry points shared by the binary and integration tests

pub mod orchestration;

pub use orchestration::{preview, run_bump, BumpOptions, UpdateResult, VersionChange};
