//! CodeWave - the agency landing page, in your terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use codewave::LaunchOptions;
use codewave_core::prelude::*;

/// CodeWave - the agency landing page, in your terminal
#[derive(Parser, Debug)]
#[command(name = "codewave")]
#[command(about = "Browse the CodeWave agency page in a terminal", long_about = None)]
struct Args {
    /// Directory holding `.codewave/config.toml` (defaults to the current one)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Run in headless mode (NDJSON on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,

    /// Start with the page already shown
    #[arg(long)]
    skip_loader: bool,

    /// Make every contact submission fail
    #[arg(long)]
    simulate_failure: bool,

    /// Write a commented default config and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = codewave_app::config::init_config_dir(&project_path)?;
        eprintln!("✅ Wrote {}", path.display());
        return Ok(());
    }

    let options = LaunchOptions {
        skip_loader: args.skip_loader,
        simulate_failure: args.simulate_failure,
    };

    if args.headless {
        codewave::run_headless(&project_path, options).await
    } else {
        codewave::run_with_project(&project_path, options).await
    }
}
