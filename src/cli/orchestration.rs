//! Bump workflow orchestration
//!
//! Drives the document rewriter once per manifest entry and collects one
//! result per entry. Nothing here prompts or prints, so the workflow can be
//! called programmatically without depending on clap or a terminal.

use crate::document::{self, WriteOptions};
use crate::domain::{Version, VersionBump};
use crate::error::{ReadError, UpdateFailure};
use crate::manifest::ManifestEntry;

/// Options for a bump run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpOptions {
    /// Compute new versions without writing any file
    pub dry_run: bool,

    /// How bumped documents are persisted
    pub write: WriteOptions,
}

/// A successful version transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionChange {
    pub previous: Version,
    pub new: Version,
}

/// Outcome of bumping a single manifest entry
#[derive(Debug)]
pub struct UpdateResult {
    /// The file named by the manifest entry
    pub file: String,

    pub outcome: Result<VersionChange, UpdateFailure>,
}

impl UpdateResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Bump every entry in listed order.
///
/// A failing entry is recorded and processing moves on; there are no retries
/// and no rollback of entries already written.
///
/// # Returns
///
/// One `UpdateResult` per entry, in the same order as `entries`
pub fn run_bump(
    entries: &[ManifestEntry],
    bump: VersionBump,
    options: BumpOptions,
) -> Vec<UpdateResult> {
    entries
        .iter()
        .map(|entry| {
            let outcome = bump_entry(entry, bump, options);
            match &outcome {
                Ok(change) => tracing::info!(
                    file = %entry.file,
                    from = %change.previous,
                    to = %change.new,
                    dry_run = options.dry_run,
                    "bumped version"
                ),
                Err(e) => tracing::warn!(file = %entry.file, error = %e, "failed to bump version"),
            }
            UpdateResult {
                file: entry.file.clone(),
                outcome,
            }
        })
        .collect()
}

fn bump_entry(
    entry: &ManifestEntry,
    bump: VersionBump,
    options: BumpOptions,
) -> Result<VersionChange, UpdateFailure> {
    let path = entry.path();
    let (previous, document) = document::read_version_field(&path, &entry.field)?;

    let new = previous.bumped(bump).map_err(UpdateFailure::Bump)?;

    if !options.dry_run {
        document::write_version_field(&path, &entry.field, document, &new, options.write)?;
    }

    Ok(VersionChange { previous, new })
}

/// Read the current version of every entry without changing anything.
pub fn preview(entries: &[ManifestEntry]) -> Vec<(ManifestEntry, Result<Version, ReadError>)> {
    entries
        .iter()
        .map(|entry| {
            let current = document::read_version_field(&entry.path(), &entry.field)
                .map(|(version, _)| version);
            (entry.clone(), current)
        })
        .collect()
}
