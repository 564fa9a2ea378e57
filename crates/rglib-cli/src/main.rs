//! rglib CLI - decode and check IUIs and licensing product names.
//!
//! # Usage
//!
//! ```bash
//! rglib decode "4 2400 8192 256 AAAAAAAAAAAABBBBBBBBBBBB"
//! rglib --json decode-list "4 2400 8192 256 AAAAAAAAAAAA,2 1000 4 10 BBBBBBBBBBBB"
//! rglib support-sku "rXg 2CC4"
//! rglib nodes "rXg V8" 2500
//! ```
//!
//! Validation commands exit with status 1 when the input is rejected.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.global.is_quiet, cli.global.is_verbose);

    let accepted = cli.run(&mut std::io::stdout().lock())?;
    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
