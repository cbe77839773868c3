//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;

use crate::domain::VersionBump;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_manifest, display_status,
    display_update_results,
};

/// Prompts user to select a bump category.
///
/// Displays a numbered list of Major, Minor and Patch and accepts a 1-based
/// index or a category name. Pressing Enter selects `default`; end of input
/// is an error.
///
/// # Returns
/// * `Ok(VersionBump)` - The selected category
/// * `Err` - If selection is invalid or input cannot be read
pub fn select_bump(default: VersionBump) -> Result<VersionBump> {
    println!("\n{}", style("Select bump type").bold());
    for (i, bump) in VersionBump::ALL.iter().enumerate() {
        let marker = if *bump == default { ">" } else { " " };
        println!("{} {}. {}", marker, i + 1, bump.description());
    }

    print!("\nBump (1-{}) [default: {}]: ", VersionBump::ALL.len(), default);
    io::stdout().flush()?;

    read_selection(io::stdin().lock(), default)
}

/// Reads one answer to the bump prompt from `reader`.
///
/// An empty line selects `default`; end of input is an error so that a
/// closed stdin never bumps anything.
pub fn read_selection(mut reader: impl BufRead, default: VersionBump) -> Result<VersionBump> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(anyhow::anyhow!("stdin closed before a bump type was chosen"));
    }
    parse_selection(&input, default)
}

/// Interprets a line typed at the bump prompt.
pub fn parse_selection(input: &str, default: VersionBump) -> Result<VersionBump> {
    let selection = input.trim();
    if selection.is_empty() {
        return Ok(default);
    }

    if let Ok(index) = selection.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| VersionBump::ALL.get(i).copied())
            .ok_or_else(|| anyhow::anyhow!("Invalid selection: {}", selection));
    }

    Ok(selection.parse::<VersionBump>()?)
}
