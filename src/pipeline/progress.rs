//! Per-target progress reporting

use crate::types::ConversionTarget;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Emits one progress line per target, above a progress bar when visible
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    /// Every line emitted so far, kept only when recording
    recorded: Option<Mutex<Vec<String>>>,
}

impl ProgressReporter {
    pub fn new(total: usize, visible: bool) -> Self {
        if !visible {
            return Self::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Self {
            bar: Some(pb),
            recorded: None,
        }
    }

    /// Reporter that only logs
    pub fn hidden() -> Self {
        Self {
            bar: None,
            recorded: None,
        }
    }

    /// Hidden reporter that also keeps its lines for `lines()`
    pub fn recording() -> Self {
        Self {
            bar: None,
            recorded: Some(Mutex::new(Vec::new())),
        }
    }

    /// Lines emitted so far; empty unless built with `recording()`
    pub fn lines(&self) -> Vec<String> {
        match &self.recorded {
            Some(lines) => lines.lock().unwrap_or_else(PoisonError::into_inner).clone(),
            None => Vec::new(),
        }
    }

    /// Called before the encoder for `target` starts
    pub fn start(&self, target: &ConversionTarget) {
        let line = target.report();
        match &self.bar {
            Some(pb) => {
                pb.println(&line);
                pb.set_message(
                    target
                        .input
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
            None => info!("{}", line),
        }
        debug!("Command: {:?}", target.command);

        if let Some(lines) = &self.recorded {
            lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line);
        }
    }

    /// Called after a target converted successfully
    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    /// Close the bar once the run is over
    pub fn complete(&self, message: &'static str) {
        if let Some(pb) = &self.bar {
            pb.finish_with_message(message);
        }
    }

    /// Leave the bar where it stopped after a failure
    pub fn abandon(&self) {
        if let Some(pb) = &self.bar {
            pb.abandon();
        }
    }
}
