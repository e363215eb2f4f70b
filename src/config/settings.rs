//! Runtime configuration settings

use crate::codecs::Codec;
use crate::error::Result;
use crate::paths::Substitutions;
use crate::pipeline::DEFAULT_WORKERS;
use crate::types::{QualitySelection, SubstitutionRule};
use std::path::PathBuf;

/// Runtime settings for the conversion pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directories searched for FLAC files
    pub roots: Vec<PathBuf>,
    /// Output root
    pub output: PathBuf,
    /// Target codec
    pub codec: Codec,
    /// Bitrate, quality or preset
    pub quality: QualitySelection,
    /// Substitution applied to file names
    pub file_substitution: Option<SubstitutionRule>,
    /// Substitution applied to directory stems
    pub dir_substitution: Option<SubstitutionRule>,
    /// File names copied over unchanged
    pub copy_names: Vec<String>,
    /// Number of parallel encoder processes
    pub workers: usize,
    /// Show progress bar
    pub show_progress: bool,
    /// Dry run mode - show planned conversions without running them
    pub dry_run: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    ///
    /// Substitution syntax and quality option exclusivity are checked here,
    /// before anything touches the filesystem.
    pub fn from_cli(cli: &super::cli::Cli) -> Result<Self> {
        let file_substitution = cli
            .substitutef
            .as_deref()
            .map(str::parse::<SubstitutionRule>)
            .transpose()?;
        let dir_substitution = cli
            .substituted
            .as_deref()
            .map(str::parse::<SubstitutionRule>)
            .transpose()?;

        let quality = QualitySelection::from_options(cli.bitrate, cli.quality, cli.preset)?;

        Ok(Self {
            roots: cli.dirs.clone(),
            output: cli.output.clone(),
            codec: cli.codec,
            quality,
            file_substitution,
            dir_substitution,
            copy_names: cli.copy.clone(),
            workers: cli.jobs.unwrap_or(DEFAULT_WORKERS).max(1),
            show_progress: !cli.quiet,
            dry_run: cli.dry_run,
        })
    }

    /// Substitution rules in the form the path mapper takes
    pub fn substitutions(&self) -> Substitutions {
        Substitutions {
            file: self.file_substitution.clone(),
            dir: self.dir_substitution.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            output: PathBuf::from("flac2m_output"),
            codec: Codec::Opus,
            quality: QualitySelection::default(),
            file_substitution: None,
            dir_substitution: None,
            copy_names: Vec::new(),
            workers: DEFAULT_WORKERS,
            show_progress: true,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use crate::error::Flac2mError;
    use crate::types::Preset;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "flac2m", "-c", "mp3", "-p", "high", "-S", "Live/Studio", "-s", "_/ ", "-j", "8",
            "--quiet", "/music",
        ])
        .unwrap();
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.codec, Codec::Mp3);
        assert_eq!(settings.quality, QualitySelection::Preset(Preset::High));
        assert_eq!(
            settings.dir_substitution,
            Some(SubstitutionRule::new("Live", "Studio"))
        );
        assert_eq!(settings.file_substitution, Some(SubstitutionRule::new("_", " ")));
        assert_eq!(settings.workers, 8);
        assert!(!settings.show_progress);
    }

    #[test]
    fn test_invalid_substitution_rejected() {
        let cli = Cli::try_parse_from(["flac2m", "-S", "a/b/c", "/music"]).unwrap();
        let err = Settings::from_cli(&cli).unwrap_err();
        assert!(matches!(err, Flac2mError::InvalidSubstitution { .. }));
    }

    #[test]
    fn test_default_workers() {
        let cli = Cli::try_parse_from(["flac2m", "/music"]).unwrap();
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.workers, DEFAULT_WORKERS);
        assert_eq!(settings.quality, QualitySelection::default());

        let cli = Cli::try_parse_from(["flac2m", "-j", "0", "/music"]).unwrap();
        assert_eq!(Settings::from_cli(&cli).unwrap().workers, 1);
    }
}
