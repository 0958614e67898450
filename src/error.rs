//! Error types surfaced by the filter pipeline.

use thiserror::Error;

/// A caller-supplied configuration the pipeline refuses to run with.
///
/// Raised synchronously before any transformation stage executes, so a
/// failed call never leaves partial results behind. Callers should
/// treat this as a programming defect in the invocation, not a
/// transient fault to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),

    #[error("model selection contains duplicate entry '{0}'")]
    DuplicateModel(String),
}
