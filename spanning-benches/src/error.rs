//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the Criterion entry point
//! turns them into a single panic message.

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
}
