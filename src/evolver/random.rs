//! Random source capability.
//!
//! The evolver never reaches for a global generator. Every random draw goes
//! through [`RandomSource`], which is implemented for all [`rand::Rng`]
//! types and for [`ReplaySource`], a scripted source for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws needed by the seed generator and the reproducer.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..upper`.
    ///
    /// `upper` is always at least 1.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Returns a real uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a seeded standard generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays fixed sequences of draws, cycling when exhausted.
///
/// Indices are reduced modulo the requested upper bound. An empty index
/// sequence always yields 0 and an empty unit sequence always yields 0.0.
///
/// # Examples
///
/// ```
/// use u_evolver::evolver::{RandomSource, ReplaySource};
///
/// let mut rng = ReplaySource::new(vec![4, 1], vec![0.25]);
/// assert_eq!(rng.next_index(3), 1);
/// assert_eq!(rng.next_index(3), 1);
/// assert_eq!(rng.next_unit(), 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    indices: Vec<usize>,
    units: Vec<f64>,
    index_cursor: usize,
    unit_cursor: usize,
}

impl ReplaySource {
    /// Replays `indices` for index draws and `units` for unit draws.
    pub fn new(indices: Vec<usize>, units: Vec<f64>) -> Self {
        Self {
            indices,
            units,
            index_cursor: 0,
            unit_cursor: 0,
        }
    }

    /// Always returns `index` (reduced modulo the bound) and `unit`.
    pub fn constant(index: usize, unit: f64) -> Self {
        Self::new(vec![index], vec![unit])
    }
}

impl RandomSource for ReplaySource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.index_cursor % self.indices.len()];
        self.index_cursor += 1;
        value % upper.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        value
    }
}
