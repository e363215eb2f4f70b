//! Source discovery

pub mod scanner;

pub use scanner::scan;
