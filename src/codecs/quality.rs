//! Quality argument resolution

use super::table::CodecCapabilities;
use crate::error::{Flac2mError, Result};
use crate::types::{Preset, QualitySelection};

/// Turn the user's quality choice into encoder arguments
///
/// Bitrate and quality values are range-checked against the codec. Some
/// codecs list a numerically larger quality minimum (mp3 `-V6` is the lowest
/// quality, `-V0` the highest), so the bounds are ordered before checking.
pub fn resolve_quality(selection: QualitySelection, caps: &CodecCapabilities) -> Result<Vec<String>> {
    let args = match selection {
        QualitySelection::Bitrate(bitrate) => {
            let (min, max) = (caps.bitrate_min, caps.bitrate_max);
            if bitrate < min || bitrate > max {
                return Err(Flac2mError::BitrateOutOfRange {
                    value: bitrate,
                    min,
                    max,
                });
            }
            with_value(caps.bitrate_arg, bitrate)
        }
        QualitySelection::Quality(quality) => {
            let (min, max) = (caps.quality_min, caps.quality_max);
            let (low, high) = (min.min(max), min.max(max));
            if quality < low || quality > high {
                return Err(Flac2mError::QualityOutOfRange {
                    value: quality,
                    min,
                    max,
                });
            }
            with_value(caps.quality_arg, quality)
        }
        QualitySelection::Preset(preset) => preset_args(preset, caps)
            .iter()
            .map(|a| a.to_string())
            .collect(),
    };

    Ok(args)
}

/// Fixed argument list for a preset
pub fn preset_args(preset: Preset, caps: &CodecCapabilities) -> &'static [&'static str] {
    match preset {
        Preset::Default => caps.preset_default,
        Preset::Low => caps.preset_low,
        Preset::Transparent => caps.preset_transparent,
        Preset::High => caps.preset_high,
    }
}

fn with_value(flag: &[&str], value: impl ToString) -> Vec<String> {
    flag.iter()
        .map(|a| a.to_string())
        .chain(std::iter::once(value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::table::{MP3, OGG_VORBIS, OPUS};

    #[test]
    fn test_bitrate_in_range() {
        let args = resolve_quality(QualitySelection::Bitrate(192), &MP3).unwrap();
        assert_eq!(args, vec!["--cbr", "-b", "192"]);
    }

    #[test]
    fn test_bitrate_bounds_inclusive() {
        assert!(resolve_quality(QualitySelection::Bitrate(32), &MP3).is_ok());
        assert!(resolve_quality(QualitySelection::Bitrate(320), &MP3).is_ok());
    }

    #[test]
    fn test_bitrate_out_of_range() {
        for bad in [0, 31, 321, 1000] {
            let err = resolve_quality(QualitySelection::Bitrate(bad), &MP3).unwrap_err();
            assert!(matches!(
                err,
                Flac2mError::BitrateOutOfRange { min: 32, max: 320, .. }
            ));
        }
    }

    #[test]
    fn test_quality_ordered_bounds() {
        let args = resolve_quality(QualitySelection::Quality(-1), &OGG_VORBIS).unwrap();
        assert_eq!(args, vec!["-q", "-1"]);
        assert!(resolve_quality(QualitySelection::Quality(11), &OGG_VORBIS).is_err());
        assert!(resolve_quality(QualitySelection::Quality(-2), &OGG_VORBIS).is_err());
    }

    #[test]
    fn test_quality_inverted_bounds() {
        // mp3 lists min 6 and max 0
        for q in [0, 3, 6] {
            let args = resolve_quality(QualitySelection::Quality(q), &MP3).unwrap();
            assert_eq!(args, vec!["-V".to_string(), q.to_string()]);
        }
        for q in [-1, 7, 100] {
            let err = resolve_quality(QualitySelection::Quality(q), &MP3).unwrap_err();
            assert!(matches!(
                err,
                Flac2mError::QualityOutOfRange { min: 6, max: 0, .. }
            ));
        }
    }

    #[test]
    fn test_presets() {
        let high = resolve_quality(QualitySelection::Preset(Preset::High), &MP3).unwrap();
        assert_eq!(high, vec!["-V0"]);

        let low = resolve_quality(QualitySelection::Preset(Preset::Low), &OPUS).unwrap();
        assert_eq!(low, vec!["--bitrate", "82"]);

        let default = resolve_quality(QualitySelection::Preset(Preset::Default), &MP3).unwrap();
        assert_eq!(default, vec!["-V4"]);
    }

    #[test]
    fn test_no_selection_is_transparent() {
        let args = resolve_quality(QualitySelection::default(), &OGG_VORBIS).unwrap();
        assert_eq!(args, vec!["-q", "5"]);
    }
}
