//! Error type for the engine.

use thiserror::Error;

/// Errors raised by the genetic algorithm.
///
/// Only [`GaError::LengthMismatch`] can surface from a running evolution;
/// it signals that two genomes of different lengths were recombined and
/// aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// Crossover produced a child whose length differs from its first parent.
    #[error("crossover length mismatch: parent has {expected} genes, child has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A gene string contained something other than `0` or `1`.
    #[error("invalid gene {found:?} at position {position}")]
    InvalidGene { position: usize, found: char },

    /// The run configuration was rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
