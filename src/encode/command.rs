//! Encoder command construction

use crate::codecs::CodecCapabilities;
use crate::error::{Flac2mError, Result};
use crate::types::{is_lossless, LOSSLESS_SUFFIX};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Swap the lossless suffix on the output file name for the codec's suffix
///
/// Only the trailing `.flac` length is replaced; other dots in the name stay.
pub fn output_path(output: &Path, caps: &CodecCapabilities) -> Result<PathBuf> {
    let name = output.file_name().ok_or_else(|| {
        Flac2mError::Internal(format!("output path has no file name: '{}'", output.display()))
    })?;

    let base: OsString = match name.to_str() {
        Some(name) => match name.strip_suffix(LOSSLESS_SUFFIX) {
            Some(base) => base.into(),
            // A file-name substitution may have altered the suffix; cut by length
            None => {
                let keep = name.chars().count().saturating_sub(LOSSLESS_SUFFIX.len());
                let end = name.char_indices().nth(keep).map_or(name.len(), |(i, _)| i);
                name[..end].into()
            }
        },
        // Not UTF-8: drop the last extension, which is `.flac` for any scanned source
        None => output.file_stem().unwrap_or(name).to_os_string(),
    };

    let mut file_name = base;
    file_name.push(".");
    file_name.push(caps.suffix);
    Ok(output.with_file_name(file_name))
}

/// Full argument vector for converting one file
///
/// Order is fixed by the encoders' CLIs:
/// `encoder, quality args, additional args, input, output flag, output`.
pub fn build_command(
    input: &Path,
    output: &Path,
    quality_args: &[String],
    caps: &CodecCapabilities,
) -> Result<(Vec<OsString>, PathBuf)> {
    let is_source = input.file_name().is_some_and(is_lossless);
    if !is_source {
        return Err(Flac2mError::NotLosslessSource {
            path: input.to_path_buf(),
        });
    }

    let output = output_path(output, caps)?;

    let mut command: Vec<OsString> = Vec::with_capacity(
        quality_args.len() + caps.additional_args.len() + caps.output_arg.len() + 3,
    );
    command.push(caps.encoder.into());
    command.extend(quality_args.iter().map(OsString::from));
    command.extend(caps.additional_args.iter().map(OsString::from));
    command.push(input.as_os_str().to_os_string());
    command.extend(caps.output_arg.iter().map(OsString::from));
    command.push(output.as_os_str().to_os_string());

    Ok((command, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::table::{MP3, OGG_VORBIS, OPUS};

    fn strings(command: &[OsString]) -> Vec<String> {
        command
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_mp3_command_order() {
        let quality = vec!["-V0".to_string()];
        let (command, output) = build_command(
            Path::new("/music/Album/song.flac"),
            Path::new("/out/Album/song.flac"),
            &quality,
            &MP3,
        )
        .unwrap();

        assert_eq!(output, PathBuf::from("/out/Album/song.mp3"));
        assert_eq!(
            strings(&command),
            vec!["lame", "-V0", "/music/Album/song.flac", "/out/Album/song.mp3"]
        );
    }

    #[test]
    fn test_ogg_command_has_output_flag() {
        let quality = vec!["-q".to_string(), "5".to_string()];
        let (command, _) = build_command(
            Path::new("/m/a.flac"),
            Path::new("/o/a.flac"),
            &quality,
            &OGG_VORBIS,
        )
        .unwrap();

        assert_eq!(
            strings(&command),
            vec!["oggenc", "-q", "5", "/m/a.flac", "-o", "/o/a.ogg"]
        );
    }

    #[test]
    fn test_opus_additional_args_before_input() {
        let quality = vec!["--bitrate".to_string(), "112".to_string()];
        let (command, _) =
            build_command(Path::new("/m/a.flac"), Path::new("/o/a.flac"), &quality, &OPUS).unwrap();

        assert_eq!(
            strings(&command),
            vec!["opusenc", "--bitrate", "112", "--framesize=60", "/m/a.flac", "/o/a.opus"]
        );
    }

    #[test]
    fn test_only_final_suffix_replaced() {
        let out = output_path(Path::new("/o/Live.at.the.flac.club.flac"), &OPUS).unwrap();
        assert_eq!(out, PathBuf::from("/o/Live.at.the.flac.club.opus"));

        let out = output_path(Path::new("/o.flac/dir.v2/01. Intro.flac"), &MP3).unwrap();
        assert_eq!(out, PathBuf::from("/o.flac/dir.v2/01. Intro.mp3"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_its_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new("/m").join(OsStr::from_bytes(b"Caf\xe9.flac"));
        let output = Path::new("/o").join(OsStr::from_bytes(b"Caf\xe9.flac"));
        let (command, out) = build_command(&input, &output, &[], &OPUS).unwrap();

        assert_eq!(out, Path::new("/o").join(OsStr::from_bytes(b"Caf\xe9.opus")));
        assert_eq!(command[command.len() - 2], input.into_os_string());
        assert_eq!(command[command.len() - 1], out.into_os_string());
    }

    #[test]
    fn test_non_flac_input_rejected() {
        let err = build_command(
            Path::new("/m/cover.jpg"),
            Path::new("/o/cover.jpg"),
            &[],
            &MP3,
        )
        .unwrap_err();
        assert!(matches!(err, Flac2mError::NotLosslessSource { .. }));

        let err = build_command(Path::new("/m/a.FLAC"), Path::new("/o/a.FLAC"), &[], &MP3)
            .unwrap_err();
        assert!(matches!(err, Flac2mError::NotLosslessSource { .. }));
    }
}
