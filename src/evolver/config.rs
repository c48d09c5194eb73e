//! Evolver configuration.
//!
//! [`EvolverConfig`] holds every parameter that stays fixed for the
//! lifetime of a run.

use super::charset::CharacterSet;
use crate::error::{EvolverError, Result};

/// Configuration for the string evolver.
///
/// # Defaults
///
/// ```
/// use u_evolver::evolver::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.goal, "hello world");
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolver::evolver::EvolverConfig;
///
/// let config = EvolverConfig::new("to be or not to be")
///     .with_population_size(200)
///     .with_survival_rate(0.3)
///     .with_mutation_rate(0.02)
///     .with_converged_limit(20)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolverConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Fraction of each generation carried over unchanged, in `(0, 1]`.
    ///
    /// The survivor count is `round(survival_rate * population_size)` and
    /// must be at least 1.
    pub survival_rate: f64,

    /// Per-character probability of a random replacement, in `[0, 1]`.
    pub mutation_rate: f64,

    /// Target string.
    pub goal: String,

    /// Number of trailing generations that must share the same best
    /// distance before the run is declared converged.
    pub converged_limit: usize,

    /// Alphabet for random characters.
    pub charset: CharacterSet,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            survival_rate: 0.2,
            mutation_rate: 0.05,
            goal: "hello world".to_string(),
            converged_limit: 10,
            charset: CharacterSet::default(),
            seed: None,
        }
    }
}

impl EvolverConfig {
    /// Default parameters with a custom goal.
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the survival rate.
    pub fn with_survival_rate(mut self, rate: f64) -> Self {
        self.survival_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the goal string.
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Sets the convergence plateau length.
    pub fn with_converged_limit(mut self, limit: usize) -> Self {
        self.converged_limit = limit;
        self
    }

    /// Sets the alphabet.
    pub fn with_charset(mut self, charset: impl Into<CharacterSet>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Goal length in characters.
    pub fn goal_len(&self) -> usize {
        self.goal.chars().count()
    }

    /// Number of individuals kept unchanged in each transition.
    pub fn survivor_count(&self) -> usize {
        (self.survival_rate * self.population_size as f64).round() as usize
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolverError::InvalidConfiguration`] describing the first
    /// offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(EvolverError::config("population_size must be at least 1"));
        }
        if !(self.survival_rate > 0.0 && self.survival_rate <= 1.0) {
            return Err(EvolverError::config(format!(
                "survival_rate must be in (0, 1], got {}",
                self.survival_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolverError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.goal.is_empty() {
            return Err(EvolverError::config("goal must not be empty"));
        }
        if self.converged_limit < 1 {
            return Err(EvolverError::config("converged_limit must be at least 1"));
        }
        if self.charset.is_empty() {
            return Err(EvolverError::config("charset must not be empty"));
        }
        if self.survivor_count() == 0 {
            return Err(EvolverError::config(format!(
                "survival_rate {} keeps no survivors out of {}",
                self.survival_rate, self.population_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: EvolverConfig) {
        match config.validate() {
            Err(EvolverError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = EvolverConfig::default();
        assert_eq!(config.population_size, 100);
        assert!((config.survival_rate - 0.2).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.goal, "hello world");
        assert_eq!(config.converged_limit, 10);
        assert_eq!(config.charset, CharacterSet::lowercase_with_space());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolverConfig::default()
            .with_population_size(4)
            .with_survival_rate(0.5)
            .with_mutation_rate(0.0)
            .with_goal("cat")
            .with_converged_limit(2)
            .with_charset("cat")
            .with_seed(42);

        assert_eq!(config.population_size, 4);
        assert!((config.survival_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.mutation_rate, 0.0);
        assert_eq!(config.goal, "cat");
        assert_eq!(config.converged_limit, 2);
        assert_eq!(config.charset.symbols(), &['c', 'a', 't']);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_survivor_count_rounds() {
        let config = EvolverConfig::default().with_population_size(4).with_survival_rate(0.5);
        assert_eq!(config.survivor_count(), 2);

        let config = EvolverConfig::default().with_population_size(10).with_survival_rate(0.25);
        assert_eq!(config.survivor_count(), 3);

        let config = EvolverConfig::default().with_population_size(7).with_survival_rate(1.0);
        assert_eq!(config.survivor_count(), 7);
    }

    #[test]
    fn test_goal_len_counts_chars() {
        assert_eq!(EvolverConfig::new("héllo").goal_len(), 5);
    }

    #[test]
    fn test_validate_population() {
        assert_invalid(EvolverConfig::default().with_population_size(0));
        assert!(EvolverConfig::default()
            .with_population_size(1)
            .with_survival_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_survival_rate() {
        assert_invalid(EvolverConfig::default().with_survival_rate(0.0));
        assert_invalid(EvolverConfig::default().with_survival_rate(-0.1));
        assert_invalid(EvolverConfig::default().with_survival_rate(1.5));
        assert_invalid(EvolverConfig::default().with_survival_rate(f64::NAN));
        assert!(EvolverConfig::default().with_survival_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate() {
        assert_invalid(EvolverConfig::default().with_mutation_rate(-0.01));
        assert_invalid(EvolverConfig::default().with_mutation_rate(1.01));
        assert_invalid(EvolverConfig::default().with_mutation_rate(f64::NAN));
        assert!(EvolverConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(EvolverConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_goal() {
        assert_invalid(EvolverConfig::new(""));
    }

    #[test]
    fn test_validate_converged_limit() {
        assert_invalid(EvolverConfig::default().with_converged_limit(0));
        assert!(EvolverConfig::default().with_converged_limit(1).validate().is_ok());
    }

    #[test]
    fn test_validate_charset() {
        assert_invalid(EvolverConfig::default().with_charset(""));
    }

    #[test]
    fn test_validate_no_survivors() {
        // round(0.1 * 4) == 0
        assert_invalid(
            EvolverConfig::default()
                .with_population_size(4)
                .with_survival_rate(0.1),
        );
    }
}
