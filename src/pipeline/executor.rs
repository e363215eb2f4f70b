//! Bounded-concurrency conversion executor
//!
//! Targets are queued on a crossbeam channel and drained by a fixed number of
//! workers on a dedicated rayon pool. The first failure stops workers from
//! taking new targets; conversions already running are left to finish.

use super::progress::ProgressReporter;
use crate::codecs::CodecCapabilities;
use crate::encode::{build_command, EncodeOutcome, EncoderBackend};
use crate::error::{Flac2mError, Result};
use crate::types::{ConversionTarget, PathMapping};
use crossbeam_channel::{unbounded, Receiver};
use std::fs;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info};

/// Worker count used when none is configured
pub const DEFAULT_WORKERS: usize = 4;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub total: usize,
    pub converted: usize,
}

/// Resolve every mapped pair into a target before anything runs
pub fn plan_targets(
    mapping: &PathMapping,
    quality_args: &[String],
    caps: &CodecCapabilities,
) -> Result<Vec<ConversionTarget>> {
    let total = mapping.len();

    mapping
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let (command, output) = build_command(&pair.input, &pair.output, quality_args, caps)?;
            Ok(ConversionTarget {
                input: pair.input.clone(),
                output,
                command,
                ordinal: index + 1,
                total,
            })
        })
        .collect()
}

/// Run all targets on `workers` threads, failing on the first bad conversion
pub fn execute(
    targets: Vec<ConversionTarget>,
    backend: &dyn EncoderBackend,
    workers: usize,
    progress: &ProgressReporter,
) -> Result<ExecutionSummary> {
    let total = targets.len();
    if total == 0 {
        return Ok(ExecutionSummary { total, converted: 0 });
    }

    let workers = workers.clamp(1, total);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("flac2m-worker-{}", i))
        .build()
        .map_err(|e| Flac2mError::ConfigError(format!("Failed to build worker pool: {}", e)))?;

    debug!(
        "Converting {} files on {} workers using {} backend",
        total,
        workers,
        backend.name()
    );

    let (tx, rx) = unbounded::<ConversionTarget>();
    for target in targets {
        tx.send(target)
            .map_err(|_| Flac2mError::Internal("work queue closed early".to_string()))?;
    }
    // Closing the queue lets workers exit once it is drained
    drop(tx);

    let abort = AtomicBool::new(false);
    let converted = AtomicUsize::new(0);
    let first_failure: Mutex<Option<Flac2mError>> = Mutex::new(None);

    pool.scope(|scope| {
        for _ in 0..workers {
            let rx = rx.clone();
            let abort = &abort;
            let converted = &converted;
            let first_failure = &first_failure;
            scope.spawn(move |_| {
                worker(rx, backend, progress, abort, converted, first_failure);
            });
        }
    });

    let failure = first_failure
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(e) = failure {
        return Err(e);
    }

    let converted = converted.load(Ordering::Relaxed);
    info!("Converted {} of {} files", converted, total);

    Ok(ExecutionSummary { total, converted })
}

fn worker(
    rx: Receiver<ConversionTarget>,
    backend: &dyn EncoderBackend,
    progress: &ProgressReporter,
    abort: &AtomicBool,
    converted: &AtomicUsize,
    first_failure: &Mutex<Option<Flac2mError>>,
) {
    for target in rx {
        if abort.load(Ordering::SeqCst) {
            debug!("Run aborted, not starting {}", target.input.display());
            break;
        }

        match convert_one(&target, backend, progress) {
            Ok(()) => {
                converted.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error!("Failed {}: {}", target.input.display(), e);
                abort.store(true, Ordering::SeqCst);
                let mut slot = first_failure.lock().unwrap_or_else(PoisonError::into_inner);
                if slot.is_none() {
                    *slot = Some(e);
                }
            }
        }
    }
}

/// Pending -> Running -> Succeeded | Failed for one target
fn convert_one(
    target: &ConversionTarget,
    backend: &dyn EncoderBackend,
    progress: &ProgressReporter,
) -> Result<()> {
    progress.start(target);

    if let Some(dir) = target.output.parent() {
        // create_dir_all treats an existing directory as success, also under races
        fs::create_dir_all(dir).map_err(|e| Flac2mError::output_error(dir, e))?;
    }

    match backend.run(&target.command) {
        Ok(EncodeOutcome::Succeeded) => {
            progress.finish();
            Ok(())
        }
        Ok(EncodeOutcome::Failed { status, diagnostic }) => {
            let diagnostic = diagnostic.trim_end();
            let diagnostic = match (diagnostic.is_empty(), status) {
                (false, _) => diagnostic.to_string(),
                (true, Some(code)) => format!("encoder exited with status {} and no output", code),
                (true, None) => "encoder was terminated by a signal".to_string(),
            };
            Err(Flac2mError::ConversionFailed {
                path: target.input.clone(),
                diagnostic,
            })
        }
        Err(e) => Err(Flac2mError::EncoderSpawn {
            path: target.input.clone(),
            reason: e.to_string(),
        }),
    }
}
