//! Encoder backend abstraction
//!
//! The pipeline never spawns processes directly; it goes through this trait so
//! the external encoder can be swapped (tests use an in-process fake).

use std::ffi::OsString;
use std::io;

/// How a single encoder invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome {
    Succeeded,
    /// Non-zero exit; `status` is `None` when killed by a signal
    Failed {
        status: Option<i32>,
        diagnostic: String,
    },
}

/// Runs external encoder programs
pub trait EncoderBackend: Send + Sync {
    /// Run a full argument vector (executable first) to completion
    ///
    /// `Err` means the process could not be started at all.
    fn run(&self, command: &[OsString]) -> io::Result<EncodeOutcome>;

    /// Output of `<encoder> --version`
    fn version(&self, encoder: &str) -> io::Result<String>;

    /// Get the name of this backend (for logging)
    fn name(&self) -> &'static str;
}
