//! flac2m CLI entry point

use clap::Parser;
use flac2m::codecs::{probe_all, render_info};
use flac2m::config::{Cli, Settings};
use flac2m::encode::ProcessEncoder;
use flac2m::pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    if cli.info {
        println!("{}", render_info(&probe_all(&ProcessEncoder::new())));
        return ExitCode::SUCCESS;
    }

    // Build settings from CLI
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("flac2m: error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Run the pipeline
    match pipeline::run(&settings) {
        Ok(result) if result.dry_run => ExitCode::SUCCESS,
        Ok(result) => {
            println!();
            println!(
                "Summary: {} converted, {} copied (of {} FLAC files)",
                result.converted, result.copied, result.total_files
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("flac2m: error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = cli.log_level().to_string().to_lowercase();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
