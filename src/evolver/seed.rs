//! Initial population.

use super::charset::CharacterSet;
use super::distance::DistanceMetric;
use super::random::RandomSource;
use super::types::{Generation, Individual};
use crate::error::{EvolverError, Result};

/// Builds Generation 0.
///
/// Draws `population_size` strings as long as `goal` (in characters), each
/// character uniformly from `charset`, evaluates them against `goal` and
/// ranks them.
///
/// Fails with [`EvolverError::InvalidConfiguration`] if `population_size`
/// is zero, `goal` is empty or `charset` is empty.
pub fn generate_seeds<S, M>(
    population_size: usize,
    goal: &str,
    charset: &CharacterSet,
    metric: &M,
    rng: &mut S,
) -> Result<Generation>
where
    S: RandomSource + ?Sized,
    M: DistanceMetric + ?Sized,
{
    if population_size < 1 {
        return Err(EvolverError::config("population_size must be at least 1"));
    }
    if goal.is_empty() {
        return Err(EvolverError::config("goal must not be empty"));
    }
    if charset.is_empty() {
        return Err(EvolverError::config("charset must not be empty"));
    }

    let length = goal.chars().count();
    let seeds = (0..population_size)
        .map(|_| {
            let string: String = (0..length).map(|_| charset.sample(rng)).collect();
            Individual::evaluated(string, goal, metric)
        })
        .collect();

    Ok(Generation::ranked(seeds))
}
