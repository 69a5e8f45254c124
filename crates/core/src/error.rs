//! Internal error type for the repair pipeline.

use thiserror::Error;

/// Failures raised while running a repair pass.
///
/// These never cross the public boundary: the pipeline catches them, logs
/// a warning, and returns the original input unchanged.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A built-in rule or custom cleaner panicked mid-pass.
    #[error("repair pass panicked: {0}")]
    PassPanicked(String),
}
