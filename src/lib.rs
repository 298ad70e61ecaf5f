//! Binary-encoded genetic algorithm.
//!
//! Evolves a population of fixed-length bit vectors toward a target
//! fitness, where fitness is the number of genes set to `1` (OneMax).
//! Each generation ranks, truncates to the fitter two thirds, recombines
//! by midpoint crossover and mutates until some candidate's fitness equals
//! the target's.
//!
//! # Key Types
//!
//! - [`Candidate`]: Bit vector with derived fitness, crossover and mutation
//! - [`Population`]: Ranking, selection, reproduction and mutate-and-check
//! - [`Evolution`]: The generation loop and its counter
//! - [`EvolutionConfig`]: Capacity, mutation probability and target
//! - [`RandomSource`]: Injected randomness ([`RngSource`], [`SequenceSource`])
//! - [`RunReport`] / [`Reporter`]: Final summary and its display sink
//!
//! # Example
//!
//! ```
//! use binary_ga::{Evolution, EvolutionConfig, RngSource};
//!
//! let config = EvolutionConfig::default()
//!     .with_capacity(50)
//!     .with_all_ones_target(12);
//! let report = Evolution::new(&config, RngSource::thread())?.run()?;
//! assert_eq!(report.fitness, 12);
//! # Ok::<(), binary_ga::GaError>(())
//! ```
//!
//! Convergence compares fitness only. Any candidate with as many ones as
//! the target ends the run, whatever the arrangement of its genes.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod candidate;
mod config;
mod error;
mod evolution;
mod population;
mod random;
mod report;

pub use candidate::Candidate;
pub use config::{
    EvolutionConfig, DEFAULT_CAPACITY, DEFAULT_MUTATION_PROBABILITY, DEFAULT_TARGET_LENGTH,
};
pub use error::GaError;
pub use evolution::Evolution;
pub use population::Population;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use report::{ConsoleReporter, Reporter, RunReport};
