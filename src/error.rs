//! Error types for the evolver.
//!
//! Configuration problems are reported eagerly, before a run starts.
//! Invariant violations indicate a bug in the transition or coupling logic
//! and abort the run.

use thiserror::Error;

/// Error type for evolver construction and runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvolverError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An internal invariant was broken (population size drift, empty
    /// survivor set reaching the coupler).
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl EvolverError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InternalInvariantViolation(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolverError>;
