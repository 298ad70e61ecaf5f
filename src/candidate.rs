//! Bit-vector candidate solutions.
//!
//! A [`Candidate`] is a fixed-length vector of binary genes together with
//! its fitness, the number of genes set to `1` (OneMax). The fitness is
//! derived state: every constructor and every mutating operator recomputes
//! it, and there is no way to set it directly.

use crate::error::GaError;
use crate::random::RandomSource;
use std::fmt;
use std::str::FromStr;

/// A candidate solution: binary genes plus their derived fitness.
///
/// # Examples
///
/// ```
/// use binary_ga::Candidate;
///
/// let candidate: Candidate = "1010".parse().unwrap();
/// assert_eq!(candidate.fitness(), 2);
/// assert_eq!(candidate.to_string(), "1010");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<bool>", into = "Vec<bool>"))]
pub struct Candidate {
    genes: Vec<bool>,
    fitness: usize,
}

impl Candidate {
    /// Creates a candidate from explicit genes.
    pub fn new(genes: Vec<bool>) -> Self {
        let mut candidate = Self { genes, fitness: 0 };
        candidate.recompute();
        candidate
    }

    /// Creates a candidate of `length` independent uniform random genes.
    pub fn generate<R: RandomSource + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self::new((0..length).map(|_| rng.bit()).collect())
    }

    /// The genes, in order.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Number of genes set to `1`.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Single-point crossover at the midpoint of `self`.
    ///
    /// The child takes `self.genes[..mid]` followed by `other.genes[mid..]`,
    /// where `mid = self.len() / 2`.
    ///
    /// # Errors
    /// Returns [`GaError::LengthMismatch`] if the child does not have the
    /// same length as `self`, which only happens when the parents differ
    /// in length.
    ///
    /// ```
    /// use binary_ga::Candidate;
    ///
    /// let a: Candidate = "1100".parse().unwrap();
    /// let b: Candidate = "0011".parse().unwrap();
    /// let child = a.cross_over(&b).unwrap();
    /// assert_eq!(child.to_string(), "1111");
    /// assert_eq!(child.fitness(), 4);
    /// ```
    pub fn cross_over(&self, other: &Candidate) -> Result<Candidate, GaError> {
        let mid = self.genes.len() / 2;
        let mut genes = Vec::with_capacity(self.genes.len());
        genes.extend_from_slice(&self.genes[..mid]);
        genes.extend_from_slice(other.genes.get(mid..).unwrap_or_default());

        if genes.len() != self.genes.len() {
            return Err(GaError::LengthMismatch {
                expected: self.genes.len(),
                actual: genes.len(),
            });
        }

        Ok(Candidate::new(genes))
    }

    /// With probability `probability`, overwrites one uniformly chosen gene
    /// with a freshly drawn random bit.
    ///
    /// The new bit may equal the old one. Returns `true` if a gene was
    /// redrawn. An empty genome is never touched.
    pub fn mutate<R: RandomSource + ?Sized>(&mut self, probability: f64, rng: &mut R) -> bool {
        if self.genes.is_empty() || !rng.chance(probability) {
            return false;
        }

        let site = rng.index(self.genes.len());
        self.genes[site] = rng.bit();
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.fitness = self.genes.iter().filter(|&&gene| gene).count();
    }
}

impl From<Vec<bool>> for Candidate {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl From<Candidate> for Vec<bool> {
    fn from(candidate: Candidate) -> Self {
        candidate.genes
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Candidate {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genes = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '1' => Ok(true),
                '0' => Ok(false),
                found => Err(GaError::InvalidGene { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(genes))
    }
}
