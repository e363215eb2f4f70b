//! Human-readable codec information for `--info`

use super::probe::EncoderStatus;
use super::table::Codec;

/// Describe each codec's encoder, ranges and presets
pub fn render_info(statuses: &[(Codec, EncoderStatus)]) -> String {
    statuses
        .iter()
        .map(|(codec, status)| codec_block(*codec, status))
        .collect::<Vec<_>>()
        .join("\n")
}

fn codec_block(codec: Codec, status: &EncoderStatus) -> String {
    let caps = codec.capabilities();

    match status {
        EncoderStatus::Missing => format!(
            "Codec: {}\nEncoder not found. You need to install the '{}' program.\n",
            codec, caps.encoder
        ),
        EncoderStatus::Available(version) => format!(
            "Codec: {}\n\
             Encoder: {}\n\
             Constant bitrate from {} to {} kb/s\n\
             Variable bitrate quality from {} (min) to {} (max)\n\
             Presets:\n\
             \x20   encoder default: {}\n\
             \x20   high:            {}\n\
             \x20   transparent:     {}\n\
             \x20   low:             {}\n",
            codec,
            version,
            caps.bitrate_min,
            caps.bitrate_max,
            caps.quality_min,
            caps.quality_max,
            caps.preset_default.join(" "),
            caps.preset_high.join(" "),
            caps.preset_transparent.join(" "),
            caps.preset_low.join(" "),
        ),
    }
}
