//! Sweep configuration.

use crate::error::{EvolverError, Result};
use crate::evolver::{CharacterSet, EvolverConfig};

/// Grid of evolver settings to evaluate.
///
/// # Examples
///
/// ```
/// use u_evolver::sweep::SweepConfig;
///
/// let config = SweepConfig::new("hello")
///     .with_population_sizes(vec![20, 40])
///     .with_survival_rates(vec![0.2, 0.5])
///     .with_mutation_rates(vec![0.01, 0.05])
///     .with_runs_per_point(3);
/// assert_eq!(config.point_count(), 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Target string shared by every run.
    pub goal: String,

    /// Alphabet shared by every run.
    pub charset: CharacterSet,

    /// Population sizes to try.
    pub population_sizes: Vec<usize>,

    /// Survival rates to try.
    pub survival_rates: Vec<f64>,

    /// Mutation rates to try.
    pub mutation_rates: Vec<f64>,

    /// Plateau length shared by every run.
    pub converged_limit: usize,

    /// Repetitions per grid point.
    pub runs_per_point: usize,

    /// Run `i` of every grid point is seeded with `base_seed + i`.
    pub base_seed: u64,

    /// Optional cap on the history length of each run.
    ///
    /// A capped run counts as not converged. Must be at least 2 when set.
    pub max_generations: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let base = EvolverConfig::default();
        Self {
            goal: base.goal,
            charset: base.charset,
            population_sizes: vec![base.population_size],
            survival_rates: vec![base.survival_rate],
            mutation_rates: vec![base.mutation_rate],
            converged_limit: base.converged_limit,
            runs_per_point: 10,
            base_seed: 0,
            max_generations: Some(10_000),
        }
    }
}

impl SweepConfig {
    /// Default grid with a custom goal.
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Self::default()
        }
    }

    /// Sets the population sizes.
    pub fn with_population_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.population_sizes = sizes;
        self
    }

    /// Sets the survival rates.
    pub fn with_survival_rates(mut self, rates: Vec<f64>) -> Self {
        self.survival_rates = rates;
        self
    }

    /// Sets the mutation rates.
    pub fn with_mutation_rates(mut self, rates: Vec<f64>) -> Self {
        self.mutation_rates = rates;
        self
    }

    /// Sets the alphabet.
    pub fn with_charset(mut self, charset: impl Into<CharacterSet>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets the plateau length.
    pub fn with_converged_limit(mut self, limit: usize) -> Self {
        self.converged_limit = limit;
        self
    }

    /// Sets the number of repetitions per grid point.
    pub fn with_runs_per_point(mut self, runs: usize) -> Self {
        self.runs_per_point = runs;
        self
    }

    /// Sets the base seed.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Sets or clears the per-run history cap.
    pub fn with_max_generations(mut self, cap: Option<usize>) -> Self {
        self.max_generations = cap;
        self
    }

    /// Number of grid points.
    pub fn point_count(&self) -> usize {
        self.population_sizes.len() * self.survival_rates.len() * self.mutation_rates.len()
    }

    /// Evolver configurations for every grid point, without seeds.
    ///
    /// Ordered by population size, then survival rate, then mutation rate.
    pub fn points(&self) -> Vec<EvolverConfig> {
        let mut points = Vec::with_capacity(self.point_count());
        for &population_size in &self.population_sizes {
            for &survival_rate in &self.survival_rates {
                for &mutation_rate in &self.mutation_rates {
                    points.push(EvolverConfig {
                        population_size,
                        survival_rate,
                        mutation_rate,
                        goal: self.goal.clone(),
                        converged_limit: self.converged_limit,
                        charset: self.charset.clone(),
                        seed: None,
                    });
                }
            }
        }
        points
    }

    /// Validates the grid and every configuration in it.
    pub fn validate(&self) -> Result<()> {
        if self.point_count() == 0 {
            return Err(EvolverError::config("sweep grid has no points"));
        }
        if self.runs_per_point == 0 {
            return Err(EvolverError::config("runs_per_point must be at least 1"));
        }
        if matches!(self.max_generations, Some(cap) if cap < 2) {
            return Err(EvolverError::config("max_generations must be at least 2"));
        }
        for point in self.points() {
            point.validate()?;
        }
        Ok(())
    }
}
