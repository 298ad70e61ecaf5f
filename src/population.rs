//! Generational population operators.
//!
//! A [`Population`] owns the working set of candidates and the random
//! source that drives them. One generation applies, in order:
//!
//! 1. [`rank`](Population::rank): stable sort by descending fitness, cut to capacity
//! 2. [`select`](Population::select): keep the fitter two thirds
//! 3. [`reproduce`](Population::reproduce): append one child per breeding-pool slot
//! 4. [`mutate_and_check`](Population::mutate_and_check): mutate in order until a
//!    candidate reaches the target fitness

use crate::candidate::Candidate;
use crate::error::GaError;
use crate::random::RandomSource;
use tracing::trace;

/// The candidates of one run, plus the run's target and random source.
#[derive(Debug, Clone)]
pub struct Population<R> {
    members: Vec<Candidate>,
    capacity: usize,
    genome_length: usize,
    mutation_probability: f64,
    target: Candidate,
    converged: Option<Candidate>,
    rng: R,
}

impl<R: RandomSource> Population<R> {
    /// Creates an empty population for `target`.
    ///
    /// The genome length of the whole run is taken from `target` and
    /// checked here once.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if `target` has no genes.
    pub fn new(
        target: Candidate,
        capacity: usize,
        mutation_probability: f64,
        rng: R,
    ) -> Result<Self, GaError> {
        if target.is_empty() {
            return Err(GaError::InvalidConfig(
                "target must have at least one gene".into(),
            ));
        }
        Ok(Self {
            members: Vec::with_capacity(capacity + capacity / 2),
            capacity,
            genome_length: target.len(),
            mutation_probability,
            target,
            converged: None,
            rng,
        })
    }

    /// Sets the capacity and fills the population with that many random
    /// candidates of the run's genome length.
    pub fn load(&mut self, capacity: usize) {
        self.capacity = capacity;
        let length = self.genome_length;
        let rng = &mut self.rng;
        self.members
            .extend((0..capacity).map(|_| Candidate::generate(length, &mut *rng)));
        trace!(members = self.members.len(), "population loaded");
    }

    /// Sorts by non-increasing fitness and truncates to the capacity.
    ///
    /// The sort is stable: equally fit candidates keep their relative order.
    pub fn rank(&mut self) {
        self.members.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
        self.members.truncate(self.capacity);
    }

    /// Keeps the first `min(len * 2 / 3, capacity)` candidates.
    ///
    /// Operates on the current order; call [`rank`](Self::rank) first.
    pub fn select(&mut self) {
        let keep = (self.members.len() * 2 / 3).min(self.capacity);
        self.members.truncate(keep);
    }

    /// Appends `len / 2` children.
    ///
    /// Each candidate `i` of the breeding pool (the first `len / 2`
    /// members) is crossed with a partner `j != i` drawn uniformly from the
    /// pool. A pool of one has no distinct partner, so its partner is
    /// drawn from the remaining members instead.
    ///
    /// # Errors
    /// Propagates [`GaError::LengthMismatch`] from crossover.
    pub fn reproduce(&mut self) -> Result<(), GaError> {
        let pool = self.members.len() / 2;
        let partners = if pool >= 2 { pool } else { self.members.len() };

        for i in 0..pool {
            let j = self.partner_for(i, partners);
            let child = self.members[i].cross_over(&self.members[j])?;
            self.members.push(child);
        }

        trace!(children = pool, members = self.members.len(), "reproduced");
        Ok(())
    }

    /// Uniform draw from `0..bound` excluding `i`. `bound` must exceed `i`
    /// and be at least 2.
    fn partner_for(&mut self, i: usize, bound: usize) -> usize {
        let j = self.rng.index(bound - 1);
        if j >= i {
            j + 1
        } else {
            j
        }
    }

    /// Mutates every candidate in order until one reaches the target fitness.
    ///
    /// On a hit the scan stops immediately, the hit is remembered as
    /// [`converged`](Self::converged), the population is re-ranked and
    /// `true` is returned; candidates after the hit are left untouched.
    /// Returns `false` after a full pass with no hit.
    pub fn mutate_and_check(&mut self) -> bool {
        let goal = self.target.fitness();
        let probability = self.mutation_probability;

        self.converged = None;
        for (index, member) in self.members.iter_mut().enumerate() {
            member.mutate(probability, &mut self.rng);
            if member.fitness() == goal {
                trace!(index, goal, "target fitness reached");
                self.converged = Some(member.clone());
                break;
            }
        }

        if self.converged.is_some() {
            self.rank();
            true
        } else {
            false
        }
    }

    /// The candidate that ended the last mutate-and-check pass, if any.
    ///
    /// For an all-ones target this is also [`best`](Self::best). A target
    /// with zeros can be outranked by fitter candidates, so the two may
    /// differ.
    pub fn converged(&self) -> Option<&Candidate> {
        self.converged.as_ref()
    }

    /// The candidates in their current order.
    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// The first candidate, which is the fittest after a ranking pass.
    pub fn best(&self) -> Option<&Candidate> {
        self.members.first()
    }

    /// Number of candidates currently held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Target size restored by [`rank`](Self::rank).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Genome length shared by every candidate of the run.
    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    /// The reference candidate whose fitness ends the run.
    pub fn target(&self) -> &Candidate {
        &self.target
    }

    /// Mutation probability used by [`mutate_and_check`](Self::mutate_and_check).
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    #[cfg(test)]
    fn with_members(mut self, members: Vec<Candidate>) -> Self {
        self.members = members;
        self
    }
}
