//! Reading and rewriting the version field of a JSON document.
//!
//! The document is held as an ordered, schema-less map. Only the named field
//! is interpreted; every other value is written back exactly as it was read.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::domain::Version;
use crate::error::{ReadError, WriteError};

/// A decoded JSON object whose key order is preserved.
pub type Document = Map<String, Value>;

/// How a bumped document is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write to a sibling temporary file and rename it over the target.
    pub atomic: bool,
    /// End the file with a newline after the closing brace.
    pub trailing_newline: bool,
}

/// Load `path`, decode it as a JSON object and parse the string at `field`.
///
/// Returns the parsed version together with the full document so the caller
/// can put the field back without disturbing anything else.
pub fn read_version_field(path: &Path, field: &str) -> Result<(Version, Document), ReadError> {
    tracing::debug!(path = %path.display(), field, "reading version field");

    let contents = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&contents).map_err(|reason| ReadError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    let raw = document
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ReadError::FieldMissingOrNotString {
            field: field.to_string(),
        })?;

    let version = Version::parse(raw)?;
    Ok((version, document))
}

fn parse_document(contents: &str) -> std::result::Result<Document, String> {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("top-level value is not an object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Replace `document[field]` with `version` and write the document to `path`.
///
/// Output uses two-space indentation. Without `options.atomic` the file is
/// overwritten in place, so a failed write may leave it truncated.
pub fn write_version_field(
    path: &Path,
    field: &str,
    mut document: Document,
    version: &Version,
    options: WriteOptions,
) -> Result<(), WriteError> {
    document.insert(field.to_string(), Value::String(version.to_string()));

    let mut rendered = serde_json::to_string_pretty(&document)?;
    if options.trailing_newline {
        rendered.push('\n');
    }

    tracing::debug!(
        path = %path.display(),
        field,
        version = %version,
        atomic = options.atomic,
        "writing version field"
    );

    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if options.atomic {
        write_atomic(path, rendered.as_bytes()).map_err(io_error)
    } else {
        fs::write(path, rendered).map_err(io_error)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
