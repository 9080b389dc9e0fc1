//! Error types for the simulation core.
//!
//! All of these are non-retryable: given the same inputs and random source
//! the outcome is deterministic. `ValidationError` and `EngineError` are
//! separate types so callers can map them to user-error vs internal-error
//! responses.

use thiserror::Error;

/// Result type alias for engine runs.
pub type EngineResult<T> = Result<T, EngineError>;

/// A request parameter fell outside its allowed range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be {min} - {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

/// Errors from a mean-parameterized size distribution.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DistributionError {
    /// Support is the positive integers; a mean below 1 is infeasible.
    /// After validation has passed this indicates a logic error in the
    /// caller, not bad user input.
    #[error("desired mean must be >= 1, got {0}")]
    InvalidMean(f64),

    /// The sampling loop hit its trial cap without a success. Fatal for
    /// this request; a retry with the same parameters would very likely
    /// hit the cap again.
    #[error("exceeded max trials: {max_trials}")]
    Exhausted { max_trials: u32 },
}

/// Errors from a steady-state engine run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// A per-app size draw failed mid-allocation. The run is aborted
    /// whole; no partial result is ever returned.
    #[error("sampling app size: {0}")]
    Sampling(#[from] DistributionError),
}
