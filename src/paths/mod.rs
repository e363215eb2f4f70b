//! Path derivation: common root and input/output mapping
//!
//! Both conversion and copy-through use the same mapping logic; only the
//! file selection differs.

pub mod common_root;
pub mod mapper;

pub use common_root::common_root;
pub use mapper::{map_paths, MapMode, Substitutions};
