//! Static per-codec capability table

use std::fmt;

/// Encoder arguments and limits for one lossy codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecCapabilities {
    /// Encoder executable
    pub encoder: &'static str,
    pub bitrate_arg: &'static [&'static str],
    pub bitrate_min: u32,
    pub bitrate_max: u32,
    pub quality_arg: &'static [&'static str],
    /// Lowest quality value; may be numerically larger than `quality_max`
    pub quality_min: i32,
    pub quality_max: i32,
    pub preset_default: &'static [&'static str],
    pub preset_high: &'static [&'static str],
    pub preset_transparent: &'static [&'static str],
    pub preset_low: &'static [&'static str],
    /// Arguments always passed before the input file
    pub additional_args: &'static [&'static str],
    /// Arguments placed between input and output file
    pub output_arg: &'static [&'static str],
    /// Output file suffix without the dot
    pub suffix: &'static str,
}

pub static MP3: CodecCapabilities = CodecCapabilities {
    encoder: "lame",
    bitrate_arg: &["--cbr", "-b"],
    bitrate_min: 32,
    bitrate_max: 320,
    quality_arg: &["-V"],
    quality_min: 6,
    quality_max: 0,
    preset_default: &["-V4"],     // ~165 kb/s
    preset_high: &["-V0"],        // ~245 kb/s
    preset_transparent: &["-V3"], // ~175 kb/s
    preset_low: &["-V5"],         // ~130 kb/s
    additional_args: &[],
    output_arg: &[],
    suffix: "mp3",
};

pub static OGG_VORBIS: CodecCapabilities = CodecCapabilities {
    encoder: "oggenc",
    bitrate_arg: &["-b"],
    bitrate_min: 16,
    bitrate_max: 400,
    quality_arg: &["-q"],
    quality_min: -1,
    quality_max: 10,
    preset_default: &["-q", "3"],     // ~112 kb/s
    preset_high: &["-q", "7"],        // ~224 kb/s
    preset_transparent: &["-q", "5"], // ~160 kb/s
    preset_low: &["-q", "3"],         // ~112 kb/s
    additional_args: &[],
    output_arg: &["-o"],
    suffix: "ogg",
};

pub static OPUS: CodecCapabilities = CodecCapabilities {
    encoder: "opusenc",
    bitrate_arg: &["--cvbr", "--bitrate"],
    bitrate_min: 12,
    bitrate_max: 512,
    quality_arg: &["--vbr", "--bitrate"],
    quality_min: 12,
    quality_max: 512,
    preset_default: &["--bitrate", "96"],
    preset_high: &["--bitrate", "192"],
    preset_transparent: &["--bitrate", "112"],
    preset_low: &["--bitrate", "82"],
    additional_args: &["--framesize=60"],
    output_arg: &[],
    suffix: "opus",
};

/// Supported target codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Codec {
    Mp3,
    #[value(name = "oggvorbis")]
    OggVorbis,
    Opus,
}

impl Codec {
    pub const ALL: [Codec; 3] = [Codec::Mp3, Codec::OggVorbis, Codec::Opus];

    pub fn name(self) -> &'static str {
        match self {
            Codec::Mp3 => "mp3",
            Codec::OggVorbis => "oggvorbis",
            Codec::Opus => "opus",
        }
    }

    pub fn capabilities(self) -> &'static CodecCapabilities {
        match self {
            Codec::Mp3 => &MP3,
            Codec::OggVorbis => &OGG_VORBIS,
            Codec::Opus => &OPUS,
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
