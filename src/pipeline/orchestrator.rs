//! Pipeline orchestration
//!
//! Coordinates option resolution, encoder probing, discovery, path mapping,
//! parallel conversion and copy-through.

use super::copy::copy_files;
use super::executor::{execute, plan_targets};
use super::progress::ProgressReporter;
use crate::codecs::{probe, resolve_quality, EncoderStatus};
use crate::config::Settings;
use crate::discovery;
use crate::encode::{EncoderBackend, ProcessEncoder};
use crate::error::{Flac2mError, Result};
use crate::paths::{map_paths, MapMode};
use crate::types::{ConversionTarget, PathMapping};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Pipeline result summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_files: usize,
    pub converted: usize,
    pub copied: usize,
    pub dry_run: bool,
}

/// Run the full conversion pipeline with real encoder processes
pub fn run(settings: &Settings) -> Result<RunSummary> {
    run_with_backend(settings, &ProcessEncoder::new())
}

/// Run the full conversion pipeline on the given encoder backend
pub fn run_with_backend(settings: &Settings, backend: &dyn EncoderBackend) -> Result<RunSummary> {
    let pipeline_start = Instant::now();
    let caps = settings.codec.capabilities();

    // Configuration errors come first, before anything touches the disk
    let quality_args = resolve_quality(settings.quality, caps)?;
    debug!("Quality arguments: {:?}", quality_args);

    if !settings.dry_run {
        match probe(backend, caps) {
            EncoderStatus::Available(version) => info!("Using encoder: {}", version),
            EncoderStatus::Missing => {
                return Err(Flac2mError::EncoderMissing {
                    codec: settings.codec.to_string(),
                    encoder: caps.encoder.to_string(),
                })
            }
        }
        prepare_output_root(&settings.output)?;
    }

    // Phase 1: Discovery
    let discovery_start = Instant::now();
    info!("Scanning for FLAC files...");
    let scan = discovery::scan(&settings.roots)?;
    if scan.is_empty() {
        return Err(Flac2mError::NoSourceFiles {
            roots: settings.roots.clone(),
        });
    }
    info!(
        "Scanned {} directories in {:.2}s",
        scan.len(),
        discovery_start.elapsed().as_secs_f64()
    );

    // Phase 2: Mapping
    let subs = settings.substitutions();
    let mapping = map_paths(&scan, &settings.output, &subs, MapMode::Convert)?;
    let targets = plan_targets(&mapping, &quality_args, caps)?;
    let copy_mapping = if settings.copy_names.is_empty() {
        PathMapping::new()
    } else {
        map_paths(&scan, &settings.output, &subs, MapMode::Copy(&settings.copy_names))?
    };

    let total_files = targets.len();

    if settings.dry_run {
        print_dry_run(&targets, &copy_mapping, settings);
        return Ok(RunSummary {
            total_files,
            converted: 0,
            copied: 0,
            dry_run: true,
        });
    }

    // Phase 3: Conversion
    let conversion_start = Instant::now();
    info!(
        "Converting {} files to {} with {} workers",
        total_files, settings.codec, settings.workers
    );
    let progress = ProgressReporter::new(total_files, settings.show_progress);
    let summary = match execute(targets, backend, settings.workers, &progress) {
        Ok(summary) => {
            progress.complete("Conversion complete");
            summary
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };
    info!(
        "Conversion completed in {:.2}s",
        conversion_start.elapsed().as_secs_f64()
    );

    // Phase 4: Copy-through
    let copied = if copy_mapping.is_empty() {
        0
    } else {
        info!("Copying {} unmodified files...", copy_mapping.len());
        copy_files(&copy_mapping)?
    };

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    Ok(RunSummary {
        total_files,
        converted: summary.converted,
        copied,
        dry_run: false,
    })
}

/// Create the output root and make sure it can be written to
///
/// Writability is tested by creating (and dropping) a temporary file in the
/// directory, so ownership, ACLs and read-only mounts are all honored.
fn prepare_output_root(output: &Path) -> Result<()> {
    if output.exists() && !output.is_dir() {
        return Err(Flac2mError::output_error(
            output,
            io::Error::from(io::ErrorKind::AlreadyExists),
        ));
    }

    fs::create_dir_all(output).map_err(|e| Flac2mError::output_error(output, e))?;

    let check_file = tempfile::Builder::new()
        .prefix(".flac2m-write-check")
        .tempfile_in(output)
        .map_err(|e| Flac2mError::output_error(output, e))?;
    debug!("Output root {} is writable", output.display());
    drop(check_file);

    Ok(())
}

/// Dry run mode - show planned work without running any encoder
fn print_dry_run(targets: &[ConversionTarget], copies: &PathMapping, settings: &Settings) {
    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    for target in targets {
        println!("{}", target.input.display());
        println!("  -> {}", target.output.display());
    }

    if !copies.is_empty() {
        println!();
        println!("Would copy:");
        for pair in copies {
            println!("{}", pair.input.display());
            println!("  -> {}", pair.output.display());
        }
    }

    println!();
    println!("─────────────────────────────────────────");
    println!();
    println!(
        "Would convert {} files to {} under {}",
        targets.len(),
        settings.codec,
        settings.output.display()
    );
    if let Some(first) = targets.first() {
        let command: Vec<_> = first.command.iter().map(|a| a.to_string_lossy()).collect();
        println!("Example command: {}", command.join(" "));
    }
    println!();
}
