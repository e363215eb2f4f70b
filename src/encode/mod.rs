//! External encoder invocation
//!
//! This module provides the `EncoderBackend` trait, the process-spawning
//! implementation and the command builder that feeds it.

pub mod command;
pub mod process;
pub mod traits;

pub use command::{build_command, output_path};
pub use process::ProcessEncoder;
pub use traits::{EncodeOutcome, EncoderBackend};
