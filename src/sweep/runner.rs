//! Sweep execution.

use std::ops::ControlFlow;

use super::config::SweepConfig;
use crate::error::Result;
use crate::evolver::Evolver;

/// Averaged outcome of one grid point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Population size of this point.
    pub population_size: usize,
    /// Survival rate of this point.
    pub survival_rate: f64,
    /// Mutation rate of this point.
    pub mutation_rate: f64,
    /// Number of runs averaged.
    pub runs: usize,
    /// Runs that ended on the plateau check rather than the cap.
    pub converged_runs: usize,
    /// Mean history length.
    pub mean_generations: f64,
    /// Mean best distance of the final generation.
    pub mean_best_distance: f64,
    /// Mean of the final generations' mean distances.
    pub mean_final_distance: f64,
}

/// Runs every grid point `runs_per_point` times and averages the results.
///
/// The whole grid is validated before the first run.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>> {
    config.validate()?;
    log::info!(
        "sweeping {} points x {} runs toward {:?}",
        config.point_count(),
        config.runs_per_point,
        config.goal
    );

    let cap = config.max_generations;
    let mut results = Vec::with_capacity(config.point_count());

    for point in config.points() {
        let mut generations = 0usize;
        let mut best = 0usize;
        let mut final_mean = 0.0;
        let mut converged_runs = 0usize;

        for run in 0..config.runs_per_point {
            let seed = config.base_seed.wrapping_add(run as u64);
            let evolver = Evolver::new(point.clone().with_seed(seed))?;
            let result = evolver.run_with_observer(|_, len| match cap {
                Some(cap) if len >= cap => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            })?;

            generations += result.summary.generations;
            best += result.summary.best_distance;
            final_mean += result.summary.mean;
            if result.converged {
                converged_runs += 1;
            }
        }

        let runs = config.runs_per_point as f64;
        let summary = SweepPoint {
            population_size: point.population_size,
            survival_rate: point.survival_rate,
            mutation_rate: point.mutation_rate,
            runs: config.runs_per_point,
            converged_runs,
            mean_generations: generations as f64 / runs,
            mean_best_distance: best as f64 / runs,
            mean_final_distance: final_mean / runs,
        };
        log::debug!(
            "point pop={} survival={} mutation={}: generations={:.1} best={:.2}",
            summary.population_size,
            summary.survival_rate,
            summary.mutation_rate,
            summary.mean_generations,
            summary.mean_best_distance
        );
        results.push(summary);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvolverError;

    #[test]
    fn test_one_result_per_point() {
        let config = SweepConfig::new("abc")
            .with_population_sizes(vec![8, 16])
            .with_survival_rates(vec![0.5])
            .with_mutation_rates(vec![0.05, 0.2])
            .with_converged_limit(3)
            .with_runs_per_point(2)
            .with_base_seed(10);
        let points = run_sweep(&config).unwrap();

        assert_eq!(points.len(), 4);
        for p in &points {
            assert_eq!(p.runs, 2);
            assert_eq!(p.converged_runs, 2);
            assert!(p.mean_generations >= 3.0);
            assert!(p.mean_best_distance <= p.mean_final_distance);
        }
        assert_eq!(points[0].population_size, 8);
        assert_eq!(points[3].population_size, 16);
    }

    #[test]
    fn test_sweep_is_reproducible() {
        let config = SweepConfig::new("sweep")
            .with_population_sizes(vec![12])
            .with_survival_rates(vec![0.25, 0.5])
            .with_mutation_rates(vec![0.1])
            .with_converged_limit(4)
            .with_runs_per_point(3)
            .with_base_seed(77);
        assert_eq!(run_sweep(&config).unwrap(), run_sweep(&config).unwrap());
    }

    #[test]
    fn test_cap_marks_runs_unconverged() {
        let config = SweepConfig::new("capped run")
            .with_population_sizes(vec![6])
            .with_survival_rates(vec![0.5])
            .with_mutation_rates(vec![0.1])
            .with_converged_limit(500)
            .with_runs_per_point(2)
            .with_max_generations(Some(4));
        let points = run_sweep(&config).unwrap();
        assert_eq!(points[0].converged_runs, 0);
        assert_eq!(points[0].mean_generations, 4.0);
    }

    #[test]
    fn test_invalid_grid_fails_before_running() {
        let config = SweepConfig::new("").with_runs_per_point(1);
        assert!(matches!(
            run_sweep(&config),
            Err(EvolverError::InvalidConfiguration(_))
        ));
    }
}
