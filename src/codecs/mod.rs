//! Target codecs: capability table, availability probing and quality options

pub mod info;
pub mod probe;
pub mod quality;
pub mod table;

pub use info::render_info;
pub use probe::{probe, probe_all, EncoderStatus};
pub use quality::resolve_quality;
pub use table::{Codec, CodecCapabilities};
