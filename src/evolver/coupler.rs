//! Furthest-partner coupling.
//!
//! Each survivor is paired with the survivor whose string is most
//! dissimilar to its own.

use super::distance::DistanceMetric;
use super::types::Individual;
use crate::error::{EvolverError, Result};

/// A crossover pair: the survivor and its most dissimilar partner.
pub type Couple<'a> = (&'a Individual, &'a Individual);

/// Pairs every survivor with its furthest survivor.
///
/// Pairwise distance is recomputed on the strings with `metric`; the cached
/// goal distances are not used. The scan starts from the survivor itself at
/// distance 0 and walks `survivors` in order, switching only to a strictly
/// further candidate, so the first maximum in survivor order wins.
///
/// The output has the same length and order as `survivors`.
///
/// # Complexity
/// O(n²) metric evaluations
///
/// # Errors
/// [`EvolverError::InternalInvariantViolation`] if `survivors` is empty.
pub fn couple<'a, M: DistanceMetric + ?Sized>(
    survivors: &'a [Individual],
    metric: &M,
) -> Result<Vec<Couple<'a>>> {
    if survivors.is_empty() {
        return Err(EvolverError::invariant("coupler received no survivors"));
    }

    let couples = survivors
        .iter()
        .map(|first| {
            let mut furthest = first;
            let mut furthest_dist = 0;
            for second in survivors {
                let dist = metric.distance(first.string(), second.string());
                if dist > furthest_dist {
                    furthest = second;
                    furthest_dist = dist;
                }
            }
            (first, furthest)
        })
        .collect();

    Ok(couples)
}
