//! Parameter sweeps over repeated evolver runs.
//!
//! A sweep evaluates every combination of population size, survival rate
//! and mutation rate, repeating each combination several times with
//! distinct seeds and averaging the outcome. Runs execute one after
//! another.
//!
//! # Key Types
//!
//! - [`SweepConfig`]: Grid definition, repetitions, seeding and run cap
//! - [`SweepPoint`]: Averaged outcome of one grid point
//! - [`run_sweep`]: Executes the grid

mod config;
mod runner;

pub use config::SweepConfig;
pub use runner::{run_sweep, SweepPoint};
