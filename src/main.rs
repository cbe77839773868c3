use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use versioner::cli::{self, BumpOptions};
use versioner::config;
use versioner::domain::VersionBump;
use versioner::manifest;
use versioner::ui;

#[derive(clap::Parser)]
#[command(
    name = "versioner",
    version,
    about = "Bump the semantic version stored in a list of JSON files"
)]
struct Args {
    #[arg(short, long, help = "Manifest listing the files to bump")]
    manifest: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, value_enum, help = "Bump category, skips the selection prompt")]
    bump: Option<VersionBump>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Show manifest entries with their current versions and exit")]
    list: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            return Ok(ExitCode::from(1));
        }
    };

    let manifest_path = args.manifest.unwrap_or_else(|| config.manifest_path());
    let entries = match manifest::load_manifest(&manifest_path) {
        Ok(entries) => entries,
        Err(e) => {
            ui::display_error(&format!("Error loading manifest: {}", e));
            return Ok(ExitCode::from(1));
        }
    };

    if args.list {
        ui::display_manifest(&cli::preview(&entries));
        return Ok(ExitCode::SUCCESS);
    }

    let warnings = manifest::check_manifest(&manifest_path, &entries);
    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }
    if entries.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let bump = match args.bump {
        Some(bump) => bump,
        None => match ui::select_bump(config.default_bump) {
            Ok(bump) => bump,
            Err(e) => {
                ui::display_error(&format!("No bump type selected: {}", e));
                return Ok(ExitCode::from(1));
            }
        },
    };
    tracing::info!(%bump, entries = entries.len(), "selected bump");

    if args.dry_run {
        ui::display_status("Dry run, no files will be written:");
    }

    let options = BumpOptions {
        dry_run: args.dry_run,
        write: config.behavior.write_options(),
    };
    let results = cli::run_bump(&entries, bump, options);
    ui::display_update_results(&results, args.dry_run);

    if results.iter().all(|r| r.is_success()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
