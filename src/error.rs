//! Unified error types for flac2m
//!
//! Error strategy:
//! - Configuration and environment errors: reported before any conversion starts
//! - Discovery errors: an empty scan is fatal, never "nothing to do"
//! - Per-file conversion errors: fatal for the whole run, no retries
//!
//! All errors include actionable suggestions where possible.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for flac2m operations
#[derive(Debug, Error)]
pub enum Flac2mError {
    // =========================================================================
    // Configuration errors - abort before any conversion
    // =========================================================================
    #[error("'{input}': invalid substitution format. Expected 'old/new'")]
    InvalidSubstitution { input: String },

    #[error("Bitrate must be between {min} and {max} (got {value})")]
    BitrateOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Quality must be between {min} and {max} (got {value})")]
    QualityOutOfRange { value: i32, min: i32, max: i32 },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // =========================================================================
    // Environment errors - abort before any conversion
    // =========================================================================
    #[error("Couldn't find the '{encoder}' encoder. You need to install it in order to use the '{codec}' codec")]
    EncoderMissing { codec: String, encoder: String },

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    // =========================================================================
    // Discovery errors
    // =========================================================================
    #[error("Cannot read '{path}': {reason}")]
    ScanError { path: PathBuf, reason: String },

    #[error("No FLAC files found under: {}\n  Tip: Check the directories contain files ending in '.flac'", format_roots(.roots))]
    NoSourceFiles { roots: Vec<PathBuf> },

    // =========================================================================
    // Per-file errors - fatal for the whole run
    // =========================================================================
    #[error("Encoding file '{path}' failed:\n\n{diagnostic}")]
    ConversionFailed { path: PathBuf, diagnostic: String },

    #[error("Could not start encoder for '{path}': {reason}")]
    EncoderSpawn { path: PathBuf, reason: String },

    #[error("Copying '{path}' failed: {reason}")]
    CopyFailed { path: PathBuf, reason: String },

    // =========================================================================
    // Defensive checks - these indicate a bug in flac2m itself
    // =========================================================================
    #[error("Not a FLAC file: '{path}'")]
    NotLosslessSource { path: PathBuf },

    #[error("Internal error (this is a bug): {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for flac2m operations
pub type Result<T> = std::result::Result<T, Flac2mError>;

fn format_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Flac2mError {
    /// Returns true if this error was detected before any file was touched
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Flac2mError::InvalidSubstitution { .. }
                | Flac2mError::BitrateOutOfRange { .. }
                | Flac2mError::QualityOutOfRange { .. }
                | Flac2mError::ConfigError(_)
                | Flac2mError::NoSourceFiles { .. }
        )
    }

    /// Returns true if this error came from a single file's conversion or copy
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Flac2mError::ConversionFailed { .. }
                | Flac2mError::EncoderSpawn { .. }
                | Flac2mError::CopyFailed { .. }
        )
    }

    /// Create a scan error from a walkdir failure
    pub fn scan_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Flac2mError::ScanError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check that you have write access to {}", path.display())
            }
            std::io::ErrorKind::NotFound => {
                format!("Directory does not exist: {}", path.parent().map(|p| p.display().to_string()).unwrap_or_default())
            }
            std::io::ErrorKind::AlreadyExists => {
                format!("'{}' exists and is not a directory", path.display())
            }
            _ => err.to_string(),
        };
        Flac2mError::OutputError { path, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_names_bounds() {
        let err = Flac2mError::BitrateOutOfRange {
            value: 500,
            min: 32,
            max: 320,
        };
        let msg = err.to_string();
        assert!(msg.contains("32"));
        assert!(msg.contains("320"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_no_source_files_lists_roots() {
        let err = Flac2mError::NoSourceFiles {
            roots: vec![PathBuf::from("/music/a"), PathBuf::from("/music/b")],
        };
        assert!(err.to_string().contains("/music/a, /music/b"));
    }

    #[test]
    fn test_output_error_permission_reason() {
        let err = Flac2mError::output_error(
            "/out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_per_file_classification() {
        let err = Flac2mError::ConversionFailed {
            path: PathBuf::from("/music/a.flac"),
            diagnostic: "boom".to_string(),
        };
        assert!(err.is_per_file());
        assert!(!err.is_configuration());
    }
}
