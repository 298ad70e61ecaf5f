//! Run configuration.
//!
//! [`EvolutionConfig`] holds the inputs fixed at construction of an
//! [`Evolution`](crate::Evolution): population capacity, mutation
//! probability and the target candidate whose fitness ends the run.

use crate::candidate::Candidate;
use crate::error::GaError;

/// Default population capacity.
pub const DEFAULT_CAPACITY: usize = 250;

/// Default per-candidate mutation probability.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.5;

/// Default target genome length (all ones).
pub const DEFAULT_TARGET_LENGTH: usize = 33;

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use binary_ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.capacity, 250);
/// assert_eq!(config.target.fitness(), 33);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use binary_ga::{Candidate, EvolutionConfig};
///
/// let config = EvolutionConfig::default()
///     .with_capacity(50)
///     .with_mutation_probability(0.3)
///     .with_target("11110000".parse::<Candidate>().unwrap());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Population size restored by every ranking pass.
    pub capacity: usize,

    /// Probability that a candidate is mutated during the mutate-and-check
    /// pass (0.0–1.0).
    pub mutation_probability: f64,

    /// Reference candidate. Only its fitness matters for termination; its
    /// length fixes the genome length of the whole run.
    pub target: Candidate,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            target: Candidate::new(vec![true; DEFAULT_TARGET_LENGTH]),
        }
    }
}

impl EvolutionConfig {
    /// Sets the population capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the target candidate.
    pub fn with_target(mut self, target: Candidate) -> Self {
        self.target = target;
        self
    }

    /// Sets an all-ones target of the given length.
    pub fn with_all_ones_target(self, length: usize) -> Self {
        self.with_target(Candidate::new(vec![true; length]))
    }

    /// Genome length implied by the target.
    pub fn genome_length(&self) -> usize {
        self.target.len()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.capacity == 0 {
            return Err(GaError::InvalidConfig("capacity must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GaError::InvalidConfig(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.target.is_empty() {
            return Err(GaError::InvalidConfig(
                "target must have at least one gene".into(),
            ));
        }
        Ok(())
    }
}
