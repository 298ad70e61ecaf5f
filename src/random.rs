//! Randomness capability consumed by the genetic operators.
//!
//! Every random decision the engine makes goes through [`RandomSource`]:
//! drawing a gene, deciding whether to mutate, and picking a mutation site
//! or a crossover partner. Production runs wrap a `rand` generator in
//! [`RngSource`]; tests replay scripted values with [`SequenceSource`].

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of the random draws used by candidates and populations.
pub trait RandomSource {
    /// Draws one uniformly distributed bit.
    fn bit(&mut self) -> bool;

    /// Returns `true` with probability `p`.
    ///
    /// `p <= 0.0` never succeeds and `p >= 1.0` always does.
    fn chance(&mut self, p: f64) -> bool;

    /// Draws an index uniformly from `0..bound`.
    ///
    /// # Panics
    /// Implementations may panic if `bound` is zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn bit(&mut self) -> bool {
        (**self).bit()
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }

    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn bit(&mut self) -> bool {
        (**self).bit()
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }

    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
///
/// ```
/// use binary_ga::{RandomSource, RngSource};
///
/// let mut source = RngSource::thread();
/// assert!(source.index(10) < 10);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Source over the lazily-initialized thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn bit(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn chance(&mut self, p: f64) -> bool {
        // Strict comparison so that p = 0 can never fire.
        self.rng.random::<f64>() < p
    }

    fn index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Fixed-sequence [`RandomSource`] for deterministic tests.
///
/// Each kind of draw has its own script, replayed cyclically. An empty
/// script yields `false`, `0.0` or `0` respectively. Scripted indices are
/// reduced modulo the requested bound, so any value is valid.
///
/// ```
/// use binary_ga::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new()
///     .with_bits([true, false])
///     .with_indices([7]);
///
/// assert!(source.bit());
/// assert!(!source.bit());
/// assert!(source.bit());
/// assert_eq!(source.index(4), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    bits: Vec<bool>,
    units: Vec<f64>,
    indices: Vec<usize>,
    bit_cursor: usize,
    unit_cursor: usize,
    index_cursor: usize,
}

impl SequenceSource {
    /// Creates a source with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the script for [`RandomSource::bit`].
    pub fn with_bits(mut self, bits: impl IntoIterator<Item = bool>) -> Self {
        self.bits = bits.into_iter().collect();
        self.bit_cursor = 0;
        self
    }

    /// Sets the script of `[0, 1)` draws compared against the probability
    /// in [`RandomSource::chance`].
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units = units.into_iter().collect();
        self.unit_cursor = 0;
        self
    }

    /// Sets the script for [`RandomSource::index`].
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices = indices.into_iter().collect();
        self.index_cursor = 0;
        self
    }
}

fn next_cyclic<T: Copy>(script: &[T], cursor: &mut usize, empty: T) -> T {
    if script.is_empty() {
        return empty;
    }
    let value = script[*cursor % script.len()];
    *cursor += 1;
    value
}

impl RandomSource for SequenceSource {
    fn bit(&mut self) -> bool {
        next_cyclic(&self.bits, &mut self.bit_cursor, false)
    }

    fn chance(&mut self, p: f64) -> bool {
        next_cyclic(&self.units, &mut self.unit_cursor, 0.0) < p
    }

    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "index bound must be positive");
        next_cyclic(&self.indices, &mut self.index_cursor, 0) % bound
    }
}
