//! Error type for the GA engine.
//!
//! Every failure is a configuration or programming error detected at the
//! boundary of a single step. Nothing is retried.

use thiserror::Error;

/// Boxed error returned by a fallible fitness function.
pub type FitnessError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum GaError {
    /// Every roulette share is zero, so there is nothing to sample from.
    #[error("no viable parents: fitness distribution too flat for proportionate selection")]
    NoViableParents,

    /// Batch breeding pairs parents consecutively.
    #[error("population size must be even, got {size}")]
    OddPopulation { size: usize },

    /// Crossover needs a split point in `[1, L-2]`.
    #[error("genome too short for crossover: length {length}, need at least 3")]
    GenomeTooShort { length: usize },

    #[error("individual {index} out of range: valid identities are 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The fitness oracle failed. The source error is passed through as-is.
    #[error(transparent)]
    Fitness(FitnessError),

    #[error("population must be non-empty")]
    EmptyPopulation,

    #[error("genome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An individual's identity must equal its position in the population.
    #[error("individual at position {position} has identity {id}")]
    IdentityMismatch { position: usize, id: usize },

    #[error("parent pool has {actual} entries, population has {expected}")]
    ParentPoolMismatch { expected: usize, actual: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("fitness of individual {index} is not finite: {value}")]
    NonFiniteFitness { index: usize, value: f64 },
}

/// Checks that a probability lies in `[0, 1]`. NaN is rejected.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidRate { name, value })
    }
}
