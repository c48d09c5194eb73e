//! Generational string evolver.
//!
//! Evolves a population of random strings toward a fixed goal. Each
//! individual is ranked by its edit distance to the goal; the best fraction
//! survives unchanged, every survivor is coupled with its most dissimilar
//! fellow survivor, and the couples breed the rest of the next generation
//! by per-character blending with uniform mutation. The run ends when the
//! best distance has not changed for `converged_limit` generations.
//!
//! # Key Types
//!
//! - [`EvolverConfig`]: Run parameters and validation
//! - [`Evolver`]: Owns the population and history, executes the loop
//! - [`EvolverResult`]: History, per-generation series and final summary
//!
//! # Building Blocks
//!
//! - [`generate_seeds`]: Random initial population
//! - [`couple`]: Furthest-partner pairing of survivors
//! - [`Reproduction`]: Crossover and mutation of couples
//! - [`plateau_reached`]: Convergence test over the history
//! - [`DistanceMetric`] / [`Levenshtein`]: Pluggable string distance
//! - [`RandomSource`] / [`ReplaySource`]: Injectable randomness

mod charset;
mod config;
mod convergence;
mod coupler;
mod distance;
mod random;
mod reproduction;
mod runner;
mod seed;
pub mod stats;
mod types;

pub use charset::CharacterSet;
pub use config::EvolverConfig;
pub use convergence::plateau_reached;
pub use coupler::{couple, Couple};
pub use distance::{DistanceMetric, Levenshtein};
pub use random::{create_rng, RandomSource, ReplaySource};
pub use reproduction::Reproduction;
pub use runner::{Evolver, EvolverResult};
pub use seed::generate_seeds;
pub use stats::{GenerationStats, RunSummary};
pub use types::{Generation, Individual, RunState};
