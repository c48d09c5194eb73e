//! Plateau convergence detection.
//!
//! A run has converged once the best distance has stayed the same for
//! `limit` consecutive generations. This is not a zero-distance test: a
//! run can converge on a non-optimal plateau.

use super::types::Generation;

/// Returns `true` when the last `limit` generations share one best distance.
///
/// Always `false` while `history.len() < limit`. With `limit == 1` any
/// non-empty history has converged.
pub fn plateau_reached(history: &[Generation], limit: usize) -> bool {
    if limit == 0 || history.len() < limit {
        return false;
    }
    let mut bests = history[history.len() - limit..]
        .iter()
        .map(Generation::best_distance);
    match bests.next() {
        Some(first) => bests.all(|best| best == first),
        None => false,
    }
}
