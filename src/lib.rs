//! flac2m - Batch FLAC to lossy conversion with a mirrored directory tree
//!
//! A command-line utility that finds FLAC files under any number of
//! directories, converts them to mp3, Ogg Vorbis or Opus with the codec's
//! external encoder, and recreates their directory structure (relative to
//! its common root) under an output directory.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: Scanning roots for directories holding FLAC files
//! - `paths`: Common-root resolution and input/output path mapping
//! - `codecs`: Codec capability table, encoder probing, quality options
//! - `encode`: Encoder command building and the swappable process backend
//! - `pipeline`: Bounded worker pool, copy-through and orchestration
//!
//! # Example
//!
//! ```no_run
//! use flac2m::{config::Settings, pipeline};
//!
//! let settings = Settings::default();
//! let result = pipeline::run(&settings).expect("Conversion failed");
//! println!("Converted {} files", result.converted);
//! ```

pub mod codecs;
pub mod config;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod types;

// Re-export key types at crate root
pub use error::{Flac2mError, Result};
pub use types::{ConversionTarget, PathMapping, QualitySelection, SourceDirectory};
