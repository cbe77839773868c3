use std::path::PathBuf;

use thiserror::Error;

use crate::domain::VersionBump;

/// Crate-level error type for failures that end a whole run
#[derive(Error, Debug)]
pub enum VersionerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),
}

/// Convenience type alias for Results in versioner
pub type Result<T> = std::result::Result<T, VersionerError>;

impl VersionerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionerError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        VersionerError::Manifest(msg.into())
    }
}

/// A version string or bump category that could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid semantic version: '{0}'")]
    InvalidVersion(String),

    #[error("cannot apply {1} bump to {0}: component would overflow")]
    Overflow(String, VersionBump),

    #[error("unknown bump category: '{0}' (expected Major, Minor or Patch)")]
    UnknownBump(String),
}

/// Failure while loading the version field out of a target document.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path} as a JSON object: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("field '{field}' is missing or not a string")]
    FieldMissingOrNotString { field: String },

    #[error(transparent)]
    InvalidVersion(#[from] ParseError),
}

/// Failure while persisting a bumped document.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Why a single manifest entry was not updated.
///
/// Read, bump and write failures are kept apart so a report can tell whether
/// the file was left untouched or a write was attempted.
#[derive(Error, Debug)]
pub enum UpdateFailure {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("version read but not bumped: {0}")]
    Bump(ParseError),

    #[error("version read but not written: {0}")]
    Write(#[from] WriteError),
}
