//! CLI argument parsing

use crate::codecs::Codec;
use crate::types::Preset;
use clap::Parser;
use std::path::PathBuf;

/// flac2m - Convert FLAC libraries to lossy codecs
///
/// Finds FLAC files under the given directories, converts them with an
/// external encoder and mirrors their directory structure under the output
/// directory.
#[derive(Parser, Debug)]
#[command(name = "flac2m")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories to search for FLAC files
    #[arg(value_name = "DIR", required_unless_present = "info")]
    pub dirs: Vec<PathBuf>,

    /// Audio codec to convert FLAC files into
    #[arg(short, long, value_enum, default_value_t = Codec::Opus)]
    pub codec: Codec,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "flac2m_output")]
    pub output: PathBuf,

    /// Constant bitrate for lossy audio
    #[arg(short, long, group = "quality_choice")]
    pub bitrate: Option<u32>,

    /// Variable bitrate quality (codec specific, see --info)
    #[arg(short, long, group = "quality_choice", allow_negative_numbers = true)]
    pub quality: Option<i32>,

    /// Quality preset: encoder default, low/OK, just transparent, high
    #[arg(short, long, value_enum, group = "quality_choice")]
    pub preset: Option<Preset>,

    /// Substitution in file names; enter as "old/new"
    #[arg(short = 's', long, value_name = "OLD/NEW")]
    pub substitutef: Option<String>,

    /// Substitution in directory names; enter as "old/new"
    #[arg(short = 'S', long, value_name = "OLD/NEW")]
    pub substituted: Option<String>,

    /// File names to copy over unchanged (useful for cover images)
    #[arg(short = 'C', long, value_name = "NAME", num_args = 1..)]
    pub copy: Vec<String>,

    /// Show detailed info on codecs/qualities and quit
    #[arg(short, long)]
    pub info: bool,

    /// Number of parallel encoder processes
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Show planned conversions without running any encoder
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only, no progress bar)
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["flac2m", "music"]).unwrap();
        assert_eq!(cli.dirs, vec![PathBuf::from("music")]);
        assert_eq!(cli.codec, Codec::Opus);
        assert_eq!(cli.output, PathBuf::from("flac2m_output"));
        assert!(cli.bitrate.is_none() && cli.quality.is_none() && cli.preset.is_none());
    }

    #[test]
    fn test_quality_options_are_exclusive() {
        assert!(Cli::try_parse_from(["flac2m", "-b", "192", "-q", "5", "music"]).is_err());
        assert!(Cli::try_parse_from(["flac2m", "-b", "192", "-p", "high", "music"]).is_err());
    }

    #[test]
    fn test_negative_quality_and_transp_preset() {
        let cli = Cli::try_parse_from(["flac2m", "-c", "oggvorbis", "-q", "-1", "music"]).unwrap();
        assert_eq!(cli.codec, Codec::OggVorbis);
        assert_eq!(cli.quality, Some(-1));

        let cli = Cli::try_parse_from(["flac2m", "-p", "transp", "music"]).unwrap();
        assert_eq!(cli.preset, Some(Preset::Transparent));
    }

    #[test]
    fn test_dirs_required_unless_info() {
        assert!(Cli::try_parse_from(["flac2m"]).is_err());
        assert!(Cli::try_parse_from(["flac2m", "--info"]).is_ok());
    }

    #[test]
    fn test_copy_names_before_dirs_separator() {
        let cli =
            Cli::try_parse_from(["flac2m", "-C", "cover.jpg", "folder.jpg", "--", "music"]).unwrap();
        assert_eq!(cli.copy, vec!["cover.jpg", "folder.jpg"]);
        assert_eq!(cli.dirs, vec![PathBuf::from("music")]);
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["flac2m", "-vv", "music"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let cli = Cli::try_parse_from(["flac2m", "-v", "--quiet", "music"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::ERROR);
    }
}
