//! Encoder backend spawning real processes

use super::traits::{EncodeOutcome, EncoderBackend};
use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};
use tracing::trace;

/// Runs encoders as child processes, capturing stderr as the diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEncoder;

impl ProcessEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl EncoderBackend for ProcessEncoder {
    fn run(&self, command: &[OsString]) -> io::Result<EncodeOutcome> {
        let (program, args) = command.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty encoder command")
        })?;

        trace!("Spawning {:?}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            Ok(EncodeOutcome::Succeeded)
        } else {
            Ok(EncodeOutcome::Failed {
                status: output.status.code(),
                diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    fn version(&self, encoder: &str) -> io::Result<String> {
        let output = Command::new(encoder)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &'static str {
        "process"
    }
}
