//! Population data model.
//!
//! An [`Individual`] is a candidate string with its cached distance to the
//! goal. A [`Generation`] is a full population snapshot kept sorted best
//! first.

use super::distance::DistanceMetric;

/// A candidate string and its distance to the goal.
///
/// The distance is computed once at creation and never changes. With the
/// `serde` feature it serializes but does not deserialize, so a distance
/// can only come from [`evaluated`](Self::evaluated).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Individual {
    string: String,
    distance: usize,
}

impl Individual {
    /// Creates an individual, computing its distance to `goal` with `metric`.
    pub fn evaluated<M: DistanceMetric + ?Sized>(string: String, goal: &str, metric: &M) -> Self {
        let distance = metric.distance(goal, &string);
        Self { string, distance }
    }

    /// The candidate string.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Cached distance to the goal.
    pub fn distance(&self) -> usize {
        self.distance
    }
}

/// One population snapshot, sorted ascending by distance.
///
/// Ties keep their insertion order. Serialize-only, like [`Individual`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Generation {
    individuals: Vec<Individual>,
}

impl Generation {
    /// Sorts `individuals` (stable) and wraps them.
    pub fn ranked(mut individuals: Vec<Individual>) -> Self {
        individuals.sort_by_key(Individual::distance);
        Self { individuals }
    }

    /// The lowest-distance individual, or `None` for an empty generation.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Distance of the best individual.
    pub fn best_distance(&self) -> Option<usize> {
        self.best().map(Individual::distance)
    }

    /// The `n` best individuals (fewer if the generation is smaller).
    pub fn top(&self, n: usize) -> &[Individual] {
        &self.individuals[..n.min(self.individuals.len())]
    }

    /// All distances in rank order.
    pub fn distances(&self) -> Vec<usize> {
        self.individuals.iter().map(Individual::distance).collect()
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the generation is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterates best first.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// The individuals as a slice, best first.
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// Lifecycle of an [`Evolver`](super::Evolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Generation 0 exists, no transition has happened yet.
    Seeded,
    /// At least one transition happened and the plateau is not reached.
    Running,
    /// The plateau check succeeded.
    Converged,
}
