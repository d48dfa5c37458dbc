//! Inventory API Conformance Library
//!
//! Runs an ordered checklist of HTTP calls against an inventory management
//! API and reports which ones behaved as expected. The library is exposed for
//! the binary and for end-to-end tests.

pub mod checks;
pub mod cli_style;
pub mod client;
pub mod config;
pub mod fixtures;
pub mod runner;

// Re-export commonly used types for convenience
pub use checks::{CheckError, CheckKind};
pub use config::{ExpectedStatuses, RunnerConfig};
pub use runner::{run_all_tests, CheckResult, ConsoleReporter, Reporter, RunSummary, Runner};
