//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! The `format_*` functions return plain strings and are testable; `display_*`
//! functions style and print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::UpdateResult;
use crate::domain::Version;
use crate::error::ReadError;
use crate::manifest::ManifestEntry;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One report line for an entry, without styling.
pub fn format_update_result(result: &UpdateResult, dry_run: bool) -> String {
    match &result.outcome {
        Ok(change) if dry_run => format!(
            "Would update {} from {} to {}",
            result.file, change.previous, change.new
        ),
        Ok(change) => format!(
            "Updated {} from {} to {}",
            result.file, change.previous, change.new
        ),
        Err(e) => format!("Error updating {}: {}", result.file, e),
    }
}

/// Summary line shown after all entries.
pub fn format_summary(results: &[UpdateResult], dry_run: bool) -> String {
    let succeeded = results.iter().filter(|r| r.is_success()).count();
    let failed = results.len() - succeeded;
    let verb = if dry_run { "would be updated" } else { "updated" };
    format!(
        "{} of {} file(s) {}, {} failed",
        succeeded,
        results.len(),
        verb,
        failed
    )
}

/// One report line for an entry with its status marker.
///
/// Failed entries carry a red cross instead of the `ERROR:` prefix, since the
/// line already says what went wrong.
pub fn format_report_line(result: &UpdateResult, dry_run: bool) -> String {
    let marker = if result.is_success() {
        style("✓").green()
    } else {
        style("✗").red().for_stderr()
    };
    format!("{} {}", marker, format_update_result(result, dry_run))
}

/// Display the outcome of every entry followed by a summary.
///
/// Each entry gets exactly one line: a green check for success on stdout or
/// a red cross naming the cause on stderr.
pub fn display_update_results(results: &[UpdateResult], dry_run: bool) {
    for result in results {
        let line = format_report_line(result, dry_run);
        if result.is_success() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    if !results.is_empty() {
        println!("\n{}", style(format_summary(results, dry_run)).bold());
    }
}

/// Display manifest entries with their current versions.
pub fn display_manifest(entries: &[(ManifestEntry, Result<Version, ReadError>)]) {
    println!("{}", style("Manifest entries:").bold());
    for (entry, current) in entries {
        match current {
            Ok(version) => println!(
                "  - {} [{}] {}",
                entry.file,
                entry.field,
                style(version).green()
            ),
            Err(e) => println!("  - {} [{}] {}", entry.file, entry.field, style(e).red()),
        }
    }
}
