//! String distance metrics.
//!
//! The same metric serves two comparisons: each individual's distance to
//! the goal (ranking) and the pairwise distance between survivors
//! (coupling). The two results are never merged into one field.

/// A distance function over two strings of any length.
///
/// Implementations must satisfy `distance(s, s) == 0`, symmetry, and
/// `distance(a, b) == 0` only when `a == b`.
pub trait DistanceMetric {
    /// Returns the distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Levenshtein edit distance over Unicode scalar values.
///
/// The minimum number of single-character insertions, deletions and
/// substitutions turning one string into the other.
///
/// # Complexity
/// O(|a|·|b|) time, O(min(|a|, |b|)) space
///
/// # Examples
///
/// ```
/// use u_evolver::evolver::{DistanceMetric, Levenshtein};
///
/// assert_eq!(Levenshtein.distance("kitten", "sitting"), 3);
/// assert_eq!(Levenshtein.distance("cat", "ccc"), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl DistanceMetric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        // Keep the shorter string in the row.
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        if short.is_empty() {
            return long.len();
        }

        let mut prev: Vec<usize> = (0..=short.len()).collect();
        let mut curr = vec![0usize; short.len() + 1];

        for (i, &lc) in long.iter().enumerate() {
            curr[0] = i + 1;
            for (j, &sc) in short.iter().enumerate() {
                let substitution = prev[j] + usize::from(lc != sc);
                let deletion = prev[j + 1] + 1;
                let insertion = curr[j] + 1;
                curr[j + 1] = substitution.min(deletion).min(insertion);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[short.len()]
    }
}
