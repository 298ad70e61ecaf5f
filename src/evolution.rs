//! Evolutionary loop execution.
//!
//! [`Evolution`] drives one run: every generation ranks, selects,
//! reproduces and mutates the population until a candidate reaches the
//! target fitness. There is no generation cap; the loop ends only on
//! convergence or on a crossover length fault.

use crate::candidate::Candidate;
use crate::config::EvolutionConfig;
use crate::error::GaError;
use crate::population::Population;
use crate::random::RandomSource;
use crate::report::RunReport;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Executes the generation loop over an owned population.
///
/// # Usage
///
/// ```
/// use binary_ga::{Evolution, EvolutionConfig, RngSource};
///
/// let config = EvolutionConfig::default()
///     .with_capacity(20)
///     .with_all_ones_target(8);
/// let mut evolution = Evolution::new(&config, RngSource::thread()).unwrap();
/// let report = evolution.run().unwrap();
/// assert!(report.generations >= 1);
/// assert_eq!(report.fitness, 8);
/// ```
#[derive(Debug)]
pub struct Evolution<R> {
    population: Population<R>,
    generation_count: usize,
    converged: bool,
}

impl<R: RandomSource> Evolution<R> {
    /// Validates `config` and loads the initial population.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if validation fails.
    pub fn new(config: &EvolutionConfig, rng: R) -> Result<Self, GaError> {
        config.validate()?;

        let mut population = Population::new(
            config.target.clone(),
            config.capacity,
            config.mutation_probability,
            rng,
        )?;
        population.load(config.capacity);

        Ok(Self {
            population,
            generation_count: 0,
            converged: false,
        })
    }

    /// Runs one generation and returns whether it converged.
    ///
    /// # Errors
    /// Propagates [`GaError::LengthMismatch`] from reproduction.
    pub fn step(&mut self) -> Result<bool, GaError> {
        self.generation_count += 1;

        self.population.rank();
        self.population.select();
        self.population.reproduce()?;
        self.converged = self.population.mutate_and_check();

        debug!(
            generation = self.generation_count,
            best = ?self.population.best().map(|c| c.fitness()),
            size = self.population.len(),
            converged = self.converged,
            "generation complete"
        );
        Ok(self.converged)
    }

    /// Runs generations until a candidate reaches the target fitness.
    ///
    /// Termination is probabilistic; a degenerate configuration (for
    /// example a mutation probability of zero with no fit candidate) can
    /// loop forever.
    ///
    /// # Errors
    /// A [`GaError::LengthMismatch`] aborts the run.
    pub fn run(&mut self) -> Result<RunReport, GaError> {
        info!(
            capacity = self.population.capacity(),
            genome_length = self.population.genome_length(),
            goal = self.population.target().fitness(),
            "evolution started"
        );
        let start = Instant::now();

        while !self.step()? {}

        let report = self.report(start.elapsed());
        info!(
            generations = report.generations,
            found = %report.found_genes,
            "target fitness reached"
        );
        Ok(report)
    }

    // The hit that ended the run; members[0] after the final rank is the
    // same candidate whenever no member can exceed the target fitness.
    fn report(&self, elapsed: Duration) -> RunReport {
        let found = self
            .population
            .converged()
            .or_else(|| self.population.best());
        RunReport {
            generations: self.generation_count,
            target_genes: self.population.target().to_string(),
            found_genes: found.map(ToString::to_string).unwrap_or_default(),
            fitness: found.map_or(0, Candidate::fitness),
            elapsed,
        }
    }

    /// Generations executed so far.
    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    /// Whether the last generation converged.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// The population being evolved.
    pub fn population(&self) -> &Population<R> {
        &self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> RngSource<StdRng> {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_new_loads_capacity() {
        let config = EvolutionConfig::default().with_capacity(30);
        let evolution = Evolution::new(&config, seeded(1)).unwrap();
        assert_eq!(evolution.population().len(), 30);
        assert_eq!(evolution.population().genome_length(), 33);
        assert_eq!(evolution.generation_count(), 0);
        assert!(!evolution.is_converged());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EvolutionConfig::default().with_capacity(0);
        assert!(matches!(
            Evolution::new(&config, seeded(1)),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_step_counts_generations() {
        let config = EvolutionConfig::default().with_capacity(50);
        let mut evolution = Evolution::new(&config, seeded(2)).unwrap();
        for expected in 1..=3 {
            if evolution.step().unwrap() {
                break;
            }
            assert_eq!(evolution.generation_count(), expected);
        }
    }

    #[test]
    fn test_run_small_target() {
        let config = EvolutionConfig::default()
            .with_capacity(4)
            .with_all_ones_target(4);
        for seed in 0..20 {
            let mut evolution = Evolution::new(&config, seeded(seed)).unwrap();
            let report = evolution.run().unwrap();
            assert!(report.generations >= 1);
            assert_eq!(report.fitness, 4);
            assert_eq!(report.found_genes, "1111");
            assert_eq!(report.target_genes, "1111");
            assert!(evolution.is_converged());
        }
    }

    #[test]
    fn test_run_default_target() {
        let config = EvolutionConfig::default();
        let mut evolution = Evolution::new(&config, seeded(42)).unwrap();
        let report = evolution.run().unwrap();
        assert_eq!(report.fitness, 33);
        assert_eq!(report.found_genes, "1".repeat(33));
        assert_eq!(report.generations, evolution.generation_count());
    }

    #[test]
    fn test_run_converges_on_fitness_not_pattern() {
        let target: Candidate = "110000".parse().unwrap();
        let config = EvolutionConfig::default()
            .with_capacity(20)
            .with_target(target);
        let mut evolution = Evolution::new(&config, seeded(5)).unwrap();
        let report = evolution.run().unwrap();
        assert_eq!(report.fitness, 2);
        assert_eq!(report.found_genes.chars().filter(|&g| g == '1').count(), 2);
        assert_eq!(
            evolution.population().converged().map(Candidate::fitness),
            Some(2)
        );
        assert_eq!(report.target_genes, "110000");
    }

    #[test]
    fn test_scripted_first_generation_convergence() {
        // All initial genes are ones, so the first mutate-and-check hits.
        let rng = SequenceSource::new().with_bits([true]).with_units([0.99]);
        let config = EvolutionConfig::default()
            .with_capacity(6)
            .with_all_ones_target(5);
        let mut evolution = Evolution::new(&config, rng).unwrap();
        let report = evolution.run().unwrap();
        assert_eq!(report.generations, 1);
        assert_eq!(report.found_genes, "11111");
    }
}
