//! Run statistics.
//!
//! [`RunSummary`] describes the final generation of a run, and
//! [`GenerationStats`] is the per-generation series that renderers plot.

use super::types::Generation;
use crate::error::{EvolverError, Result};

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: usize = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

/// Median; the average of the two middle values for even lengths.
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}

/// Every most-frequent value, ascending. Empty for an empty slice.
pub fn modes(values: &[usize]) -> Vec<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut best_count = 0;
    let mut result = Vec::new();
    for run in sorted.chunk_by(|a, b| a == b) {
        if run.len() > best_count {
            best_count = run.len();
            result.clear();
        }
        if run.len() == best_count {
            result.push(run[0]);
        }
    }
    result
}

/// Population standard deviation.
pub fn stdev(values: &[usize]) -> Option<f64> {
    let mu = mean(values)?;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mu;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

/// Best and mean distance of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Index in the history (0 is the seed generation).
    pub generation: usize,
    /// Distance of the best individual.
    pub best_distance: usize,
    /// Mean distance over the generation.
    pub mean_distance: f64,
}

impl GenerationStats {
    /// Summarizes `generation` at history index `index`.
    pub fn of(index: usize, generation: &Generation) -> Result<Self> {
        let distances = generation.distances();
        match (generation.best_distance(), mean(&distances)) {
            (Some(best_distance), Some(mean_distance)) => Ok(Self {
                generation: index,
                best_distance,
                mean_distance,
            }),
            _ => Err(EvolverError::invariant(format!("generation {index} is empty"))),
        }
    }
}

/// The per-generation series for a whole history.
pub fn series(history: &[Generation]) -> Result<Vec<GenerationStats>> {
    history
        .iter()
        .enumerate()
        .map(|(i, gen)| GenerationStats::of(i, gen))
        .collect()
}

/// Statistics over the final generation of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Number of generations in the history, seed generation included.
    pub generations: usize,
    /// Mean final distance.
    pub mean: f64,
    /// Median final distance.
    pub median: f64,
    /// Most frequent final distances, ascending.
    pub mode: Vec<usize>,
    /// Population standard deviation of final distances.
    pub stdev: f64,
    /// Best string of the final generation.
    pub best: String,
    /// Distance of [`best`](Self::best) to the goal.
    pub best_distance: usize,
}

impl RunSummary {
    /// Summarizes the last generation of `history`.
    ///
    /// # Errors
    /// [`EvolverError::InternalInvariantViolation`] if the history or its
    /// last generation is empty.
    pub fn from_history(history: &[Generation]) -> Result<Self> {
        let last = history
            .last()
            .ok_or_else(|| EvolverError::invariant("history is empty"))?;
        let best = last
            .best()
            .ok_or_else(|| EvolverError::invariant("final generation is empty"))?;
        let distances = last.distances();
        let empty = || EvolverError::invariant("final generation is empty");

        Ok(Self {
            generations: history.len(),
            mean: mean(&distances).ok_or_else(empty)?,
            median: median(&distances).ok_or_else(empty)?,
            mode: modes(&distances),
            stdev: stdev(&distances).ok_or_else(empty)?,
            best: best.string().to_string(),
            best_distance: best.distance(),
        })
    }
}
