use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryWarning;
use crate::error::{Result, VersionerError};

/// Default manifest file name, resolved against the working directory.
pub const DEFAULT_MANIFEST: &str = "versioner.json";

/// One file whose version field should be bumped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Path to the JSON document
    pub file: String,

    /// Key inside the document holding the version string
    pub field: String,
}

impl ManifestEntry {
    pub fn new(file: impl Into<String>, field: impl Into<String>) -> Self {
        ManifestEntry {
            file: file.into(),
            field: field.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}

/// Loads the manifest: a JSON array of `{"file": ..., "field": ...}` objects.
///
/// # Returns
/// * `Ok(Vec<ManifestEntry>)` - Entries in listed order
/// * `Err` - If the file cannot be read or is not a valid manifest
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        VersionerError::manifest(format!("cannot read {}: {}", path.display(), e))
    })?;

    let entries: Vec<ManifestEntry> = serde_json::from_str(&contents).map_err(|e| {
        VersionerError::manifest(format!("cannot parse {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded manifest");
    Ok(entries)
}

/// Collects non-fatal issues with a loaded manifest.
pub fn check_manifest(path: &Path, entries: &[ManifestEntry]) -> Vec<BoundaryWarning> {
    if entries.is_empty() {
        return vec![BoundaryWarning::EmptyManifest {
            path: path.display().to_string(),
        }];
    }

    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for entry in entries {
        if !seen.insert(entry) {
            let warning = BoundaryWarning::DuplicateEntry {
                file: entry.file.clone(),
                field: entry.field.clone(),
            };
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
    }
    warnings
}
