//! Shared test utilities for logent integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Call [`init_tracing`] first if you want the library's
//! `tracing` events on the test output (`RUST_LOG=logent_core=trace`).

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

/// Install a test-writer subscriber once per test binary. Later calls are
/// no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}
