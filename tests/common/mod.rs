//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{RecordingReporter, TestServer};
//! use inventory_conformance::{Runner, RunnerConfig};
//!
//! #[tokio::test]
//! async fn test_full_run() {
//!     let server = TestServer::spawn().await;
//!     let config = RunnerConfig::for_base_url(&server.base_url).unwrap();
//!
//!     let summary = Runner::new(config)
//!         .run(&mut RecordingReporter::default())
//!         .await
//!         .unwrap();
//!     assert!(summary.all_passed());
//! }
//! ```

mod server;

// Public API - this is what tests import
pub use constants::*;
pub use reporter::RecordingReporter;
#[allow(unused_imports)]
pub use server::{RecordedRequest, ServerBehavior, StoredProduct, TestServer};
