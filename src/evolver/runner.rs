//! Generational loop execution.
//!
//! [`Evolver`] owns the current generation and the history of one run and
//! drives it: seed → (rank → couple → reproduce → rank)* → summary.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;

use super::config::EvolverConfig;
use super::convergence::plateau_reached;
use super::coupler::couple;
use super::distance::{DistanceMetric, Levenshtein};
use super::random::{create_rng, RandomSource};
use super::reproduction::Reproduction;
use super::seed::generate_seeds;
use super::stats::{mean, series, GenerationStats, RunSummary};
use super::types::{Generation, RunState};
use crate::error::{EvolverError, Result};

/// Result of a run.
#[derive(Debug, Clone)]
pub struct EvolverResult {
    /// Statistics over the final generation.
    pub summary: RunSummary,

    /// Best and mean distance for every generation, seed included.
    pub series: Vec<GenerationStats>,

    /// Every generation of the run, seed first.
    pub history: Vec<Generation>,

    /// Whether the plateau check ended the run. `false` when an observer
    /// or a cancellation flag stopped it first.
    pub converged: bool,
}

/// Evolves a population of strings toward a goal.
///
/// # Usage
///
/// ```
/// use u_evolver::evolver::{Evolver, EvolverConfig};
///
/// let config = EvolverConfig::new("hello")
///     .with_population_size(40)
///     .with_survival_rate(0.5)
///     .with_mutation_rate(0.05)
///     .with_converged_limit(8)
///     .with_seed(42);
///
/// let result = Evolver::new(config)?.run_to_convergence()?;
/// assert!(result.converged);
/// assert_eq!(result.summary.generations, result.history.len());
/// # Ok::<(), u_evolver::EvolverError>(())
/// ```
pub struct Evolver<R = StdRng, M = Levenshtein> {
    config: EvolverConfig,
    metric: M,
    rng: R,
    current: Generation,
    history: Vec<Generation>,
    state: RunState,
}

impl Evolver {
    /// Validates `config` and builds Generation 0 with a standard
    /// generator seeded from `config.seed` (or a random seed).
    pub fn new(config: EvolverConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("seeding evolver rng with {seed}");
        Self::with_rng(config, create_rng(seed))
    }
}

impl<R: RandomSource> Evolver<R> {
    /// Validates `config` and builds Generation 0 from `rng`.
    pub fn with_rng(config: EvolverConfig, rng: R) -> Result<Self> {
        Self::with_metric(config, rng, Levenshtein)
    }
}

impl<R: RandomSource, M: DistanceMetric> Evolver<R, M> {
    /// Validates `config` and builds Generation 0 from `rng`, ranking with
    /// `metric`.
    pub fn with_metric(config: EvolverConfig, mut rng: R, metric: M) -> Result<Self> {
        config.validate()?;

        let outside: String = config
            .goal
            .chars()
            .filter(|&c| !config.charset.contains(c))
            .collect();
        if !outside.is_empty() {
            log::warn!(
                "goal {:?} has characters outside the alphabet ({:?}); distance 0 is unreachable",
                config.goal,
                outside
            );
        }

        let current = generate_seeds(
            config.population_size,
            &config.goal,
            &config.charset,
            &metric,
            &mut rng,
        )?;
        let history = vec![current.clone()];

        Ok(Self {
            config,
            metric,
            rng,
            current,
            history,
            state: RunState::Seeded,
        })
    }

    /// The run's configuration.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// The most recent generation.
    pub fn current_generation(&self) -> &Generation {
        &self.current
    }

    /// Every generation so far, seed first.
    pub fn history(&self) -> &[Generation] {
        &self.history
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the last `converged_limit` generations share one best distance.
    ///
    /// Always `false` before the first transition.
    pub fn is_converged(&self) -> bool {
        self.state != RunState::Seeded
            && plateau_reached(&self.history, self.config.converged_limit)
    }

    /// Performs one generation transition and appends it to the history.
    ///
    /// The best `round(survival_rate * population_size)` individuals are
    /// kept unchanged, coupled, and bred into the remaining slots. Offspring
    /// precede survivors before the stable re-rank, so on equal distance an
    /// offspring ranks ahead of a survivor.
    ///
    /// Returns the state after the convergence check.
    pub fn step(&mut self) -> Result<RunState> {
        let size = self.config.population_size;
        if self.current.len() != size {
            return Err(EvolverError::invariant(format!(
                "generation has {} individuals, expected {size}",
                self.current.len()
            )));
        }

        let survivors = self.current.top(self.config.survivor_count());
        let remaining = size - survivors.len();
        let couples = couple(survivors, &self.metric)?;

        let breeder = Reproduction {
            goal: &self.config.goal,
            charset: &self.config.charset,
            mutation_rate: self.config.mutation_rate,
            metric: &self.metric,
        };
        let mut next = breeder.offspring(&couples, remaining, &mut self.rng)?;
        next.extend_from_slice(survivors);

        if next.len() != size {
            return Err(EvolverError::invariant(format!(
                "transition produced {} individuals, expected {size}",
                next.len()
            )));
        }

        self.current = Generation::ranked(next);
        self.history.push(self.current.clone());

        log::debug!(
            "generation {}: best={} mean={:.3}",
            self.history.len() - 1,
            self.current.best_distance().unwrap_or_default(),
            mean(&self.current.distances()).unwrap_or_default()
        );

        self.state = if plateau_reached(&self.history, self.config.converged_limit) {
            RunState::Converged
        } else {
            RunState::Running
        };
        Ok(self.state)
    }

    /// Runs transitions until the plateau check succeeds.
    ///
    /// There is no iteration cap. With the bundled metric the best distance
    /// never increases, which bounds the run; a custom metric or a caller
    /// that needs a hard limit should use
    /// [`run_with_observer`](Self::run_with_observer).
    pub fn run_to_convergence(self) -> Result<EvolverResult> {
        self.run_with_observer(|_, _| ControlFlow::Continue(()))
    }

    /// Runs until convergence or until `cancel` is set.
    ///
    /// The flag is checked after every transition.
    pub fn run_with_cancel(self, cancel: Option<Arc<AtomicBool>>) -> Result<EvolverResult> {
        self.run_with_observer(|_, _| match &cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
    }

    /// Runs until convergence, calling `observer` after every transition.
    ///
    /// The observer receives the new generation and the history length.
    /// Returning [`ControlFlow::Break`] stops the run; the result reports
    /// `converged` only if that last transition reached the plateau.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> Result<EvolverResult>
    where
        F: FnMut(&Generation, usize) -> ControlFlow<()>,
    {
        log::info!(
            "evolving toward {:?}: population={} survival={} mutation={} limit={}",
            self.config.goal,
            self.config.population_size,
            self.config.survival_rate,
            self.config.mutation_rate,
            self.config.converged_limit
        );

        let converged = loop {
            let state = self.step()?;
            if observer(&self.current, self.history.len()).is_break() {
                break state == RunState::Converged;
            }
            if state == RunState::Converged {
                break true;
            }
        };

        self.finish(converged)
    }

    fn finish(self, converged: bool) -> Result<EvolverResult> {
        let summary = RunSummary::from_history(&self.history)?;
        let series = series(&self.history)?;

        if converged {
            log::info!(
                "converged after {} generations: best {:?} at distance {}",
                summary.generations,
                summary.best,
                summary.best_distance
            );
        } else {
            log::info!(
                "stopped after {} generations without converging: best {:?} at distance {}",
                summary.generations,
                summary.best,
                summary.best_distance
            );
        }

        Ok(EvolverResult {
            summary,
            series,
            history: self.history,
            converged,
        })
    }
}
