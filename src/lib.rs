pub mod boundary;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ui;

pub use error::{Result, VersionerError};
