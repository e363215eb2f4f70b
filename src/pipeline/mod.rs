//! Conversion pipeline: orchestration, worker pool and copy-through

pub mod copy;
pub mod executor;
pub mod orchestrator;
pub mod progress;

pub use copy::copy_files;
pub use executor::{execute, plan_targets, ExecutionSummary, DEFAULT_WORKERS};
pub use orchestrator::{run, run_with_backend, RunSummary};
pub use progress::ProgressReporter;
