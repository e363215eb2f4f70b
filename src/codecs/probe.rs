//! Encoder availability probing

use super::table::{Codec, CodecCapabilities};
use crate::encode::EncoderBackend;
use tracing::{debug, warn};

/// Whether a codec's encoder can be run on this system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderStatus {
    /// First line of the encoder's `--version` output
    Available(String),
    Missing,
}

/// Probe one encoder by asking for its version
///
/// Only a failure to start the program counts as missing; encoders that
/// print their version and exit non-zero are still usable.
pub fn probe(backend: &dyn EncoderBackend, caps: &CodecCapabilities) -> EncoderStatus {
    match backend.version(caps.encoder) {
        Ok(stdout) => {
            let version = stdout.lines().next().unwrap_or_default().trim().to_string();
            debug!("{} reports version '{}'", caps.encoder, version);
            EncoderStatus::Available(version)
        }
        Err(e) => {
            warn!("{} encoder not found: {}", caps.encoder, e);
            EncoderStatus::Missing
        }
    }
}

/// Probe every known codec once, in table order
pub fn probe_all(backend: &dyn EncoderBackend) -> Vec<(Codec, EncoderStatus)> {
    Codec::ALL
        .iter()
        .map(|&codec| (codec, probe(backend, codec.capabilities())))
        .collect()
}
