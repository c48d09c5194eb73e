//! Generational string evolution toward a fixed goal.
//!
//! - **Evolver**: seeds a random population, ranks it by edit distance to
//!   the goal, couples each survivor with its most dissimilar survivor,
//!   breeds offspring by per-character crossover and mutation, and stops
//!   once the best distance plateaus.
//! - **Sweep**: repeats runs over a grid of population sizes, survival
//!   rates and mutation rates and averages the outcome per grid point.
//!
//! # Architecture
//!
//! The crate is computation only. Rendering, persistence and user interface
//! are left to consumers, which receive the full history and a
//! per-generation series of best and mean distances.

pub mod error;
pub mod evolver;
pub mod sweep;

pub use error::{EvolverError, Result};
