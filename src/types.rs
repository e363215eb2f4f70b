//! Core data types for flac2m
//!
//! These types represent the domain model and flow through the pipeline.

use crate::error::{Flac2mError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File-name suffix identifying lossless sources (case-sensitive)
pub const LOSSLESS_SUFFIX: &str = ".flac";

/// Whether a file name carries the lossless-source suffix
///
/// Compared on the raw encoded bytes so names that are not valid UTF-8 still
/// qualify.
pub fn is_lossless(name: impl AsRef<OsStr>) -> bool {
    name.as_ref()
        .as_encoded_bytes()
        .ends_with(LOSSLESS_SUFFIX.as_bytes())
}

// =============================================================================
// Discovery
// =============================================================================

/// A directory that holds at least one lossless source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirectory {
    /// Absolute directory path
    pub path: PathBuf,
    /// Every file in the directory, not only the lossless ones
    pub files: Vec<OsString>,
}

impl SourceDirectory {
    pub fn new(path: impl Into<PathBuf>, files: Vec<OsString>) -> Self {
        Self {
            path: path.into(),
            files,
        }
    }
}

/// Directories found by the scanner, in traversal order
pub type ScanResult = Vec<SourceDirectory>;

// =============================================================================
// Path mapping
// =============================================================================

/// A substring substitution applied to directory stems or file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub old: String,
    pub new: String,
}

impl SubstitutionRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Replace every non-overlapping occurrence in a single pass
    pub fn apply(&self, text: &str) -> String {
        if self.old.is_empty() {
            return text.to_string();
        }
        text.replace(&self.old, &self.new)
    }

    /// Apply to a file name; names that are not valid UTF-8 pass through
    pub fn apply_name(&self, name: &OsStr) -> OsString {
        match name.to_str() {
            Some(text) => self.apply(text).into(),
            None => name.to_os_string(),
        }
    }

    /// Apply to a relative directory path; non-UTF-8 paths pass through
    pub fn apply_path(&self, path: &Path) -> PathBuf {
        match path.to_str() {
            Some(text) => PathBuf::from(self.apply(text)),
            None => path.to_path_buf(),
        }
    }
}

impl FromStr for SubstitutionRule {
    type Err = Flac2mError;

    /// Parse `old/new`; anything but exactly one `/` is rejected
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [old, new] if !old.is_empty() => Ok(Self::new(*old, *new)),
            _ => Err(Flac2mError::InvalidSubstitution {
                input: s.to_string(),
            }),
        }
    }
}

/// One input file and where its output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PathPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered input/output pairs for one run
pub type PathMapping = Vec<PathPair>;

// =============================================================================
// Quality selection
// =============================================================================

/// Named quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Preset {
    /// Encoder's own default
    Default,
    /// Low but acceptable
    Low,
    /// Just transparent
    #[value(name = "transp", alias = "transparent")]
    Transparent,
    /// High quality
    High,
}

/// The single active quality choice for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitySelection {
    /// Constant bitrate in kb/s
    Bitrate(u32),
    /// Codec-specific variable bitrate quality
    Quality(i32),
    Preset(Preset),
}

impl Default for QualitySelection {
    fn default() -> Self {
        QualitySelection::Preset(Preset::Transparent)
    }
}

impl QualitySelection {
    /// Build from mutually exclusive CLI options; none set means the default
    pub fn from_options(
        bitrate: Option<u32>,
        quality: Option<i32>,
        preset: Option<Preset>,
    ) -> Result<Self> {
        match (bitrate, quality, preset) {
            (None, None, None) => Ok(Self::default()),
            (Some(b), None, None) => Ok(Self::Bitrate(b)),
            (None, Some(q), None) => Ok(Self::Quality(q)),
            (None, None, Some(p)) => Ok(Self::Preset(p)),
            _ => Err(Flac2mError::ConfigError(
                "--bitrate, --quality and --preset are mutually exclusive".to_string(),
            )),
        }
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// One fully resolved unit of conversion work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTarget {
    pub input: PathBuf,
    /// Output path carrying the target codec's suffix
    pub output: PathBuf,
    /// Full encoder argument vector, executable first
    pub command: Vec<OsString>,
    /// 1-based position in the run
    pub ordinal: usize,
    pub total: usize,
}

impl ConversionTarget {
    /// Progress line shown before the encoder starts
    pub fn report(&self) -> String {
        let name = self
            .output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();
        format!("Converting file {}/{}: {}", self.ordinal, self.total, name)
    }
}
