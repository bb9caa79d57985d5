//! Error types for fitsim operations

use thiserror::Error;

/// Errors surfaced by the scenario-file and CLI boundaries.
///
/// Placement itself never fails: a request no block can hold is reported as
/// the ordinary [`Placement::Unallocated`](crate::Placement::Unallocated)
/// value, not as an error.
#[derive(Error, Debug)]
pub enum FitsimError {
    #[error("Unknown policy: {0} (valid: first-fit, next-fit, best-fit, worst-fit)")]
    UnknownPolicy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FitsimError>;
