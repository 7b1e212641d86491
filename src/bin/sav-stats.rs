//! Save file (.sav) statistics CLI
//!
//! Reads one save file and writes its header and estimated building and
//! vehicle counts to stdout as JSON. Progress goes to stderr; set
//! `RUST_LOG=debug` for chunk stream detail.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sav_stats::{parse_save_file, CountingMethod, FactoryStats, ParserError};

/// Factory statistics from a save (.sav) file
#[derive(Parser)]
#[command(name = "sav-stats")]
#[command(about = "Factory statistics from a save (.sav) file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the save file
    file: PathBuf,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,

    /// How buildings and vehicles are counted
    #[arg(short, long, value_enum, default_value = "references")]
    method: CountingMethod,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let parsed = match parse_save_file(&cli.file, cli.method) {
        Ok(p) => p,
        Err(e) => {
            if e.is_format_error() {
                log::error!("{} is not a readable save file", cli.file.display());
            }
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !parsed.reassembly.end.is_clean() {
        log::info!("Statistics cover the body up to the {}", parsed.reassembly.end);
    }

    match render(&parsed.stats, cli.compact) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing to JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(stats: &FactoryStats, compact: bool) -> Result<String, ParserError> {
    let json = if compact {
        serde_json::to_string(stats)?
    } else {
        serde_json::to_string_pretty(stats)?
    };
    Ok(json)
}
