//! Offspring synthesis: per-character blending crossover plus uniform
//! mutation.

use super::charset::CharacterSet;
use super::coupler::Couple;
use super::distance::DistanceMetric;
use super::random::RandomSource;
use super::types::Individual;
use crate::error::{EvolverError, Result};

/// Parameters shared by every offspring of one transition.
#[derive(Debug)]
pub struct Reproduction<'a, M: ?Sized> {
    /// Target string.
    pub goal: &'a str,
    /// Alphabet for mutated characters.
    pub charset: &'a CharacterSet,
    /// Per-character mutation probability.
    pub mutation_rate: f64,
    /// Metric for the offspring's goal distance.
    pub metric: &'a M,
}

impl<M: DistanceMetric + ?Sized> Reproduction<'_, M> {
    /// Produces exactly `count` offspring from `couples`.
    ///
    /// Offspring `i` is bred from `couples[i % couples.len()]`. For every
    /// goal position a unit draw below `mutation_rate` yields a random
    /// character from the alphabet; otherwise a second unit draw below 0.5
    /// copies the first parent's character and anything else copies the
    /// partner's. Each offspring is evaluated against the goal.
    ///
    /// # Errors
    /// [`EvolverError::InternalInvariantViolation`] if `couples` is empty
    /// while `count > 0`, or a parent is not as long as the goal.
    pub fn offspring<S: RandomSource + ?Sized>(
        &self,
        couples: &[Couple<'_>],
        count: usize,
        rng: &mut S,
    ) -> Result<Vec<Individual>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if couples.is_empty() {
            return Err(EvolverError::invariant("no couples to breed offspring from"));
        }

        let length = self.goal.chars().count();
        let parents = couples
            .iter()
            .map(|(first, partner)| {
                let a: Vec<char> = first.string().chars().collect();
                let b: Vec<char> = partner.string().chars().collect();
                if a.len() != length || b.len() != length {
                    return Err(EvolverError::invariant(format!(
                        "parent length differs from goal length {length}"
                    )));
                }
                Ok((a, b))
            })
            .collect::<Result<Vec<_>>>()?;

        let children = (0..count)
            .map(|i| {
                let (a, b) = &parents[i % parents.len()];
                let string: String = (0..length)
                    .map(|j| {
                        if rng.next_unit() < self.mutation_rate {
                            self.charset.sample(rng)
                        } else if rng.next_unit() < 0.5 {
                            a[j]
                        } else {
                            b[j]
                        }
                    })
                    .collect();
                Individual::evaluated(string, self.goal, self.metric)
            })
            .collect();

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolver::coupler::couple;
    use crate::evolver::distance::Levenshtein;
    use crate::evolver::random::{create_rng, ReplaySource};

    fn ind(s: &str, goal: &str) -> Individual {
        Individual::evaluated(s.to_string(), goal, &Levenshtein)
    }

    #[test]
    fn test_exact_count() {
        let charset = CharacterSet::default();
        let survivors = vec![ind("hello", "hello"), ind("world", "hello")];
        let couples = couple(&survivors, &Levenshtein).unwrap();
        let repro = Reproduction {
            goal: "hello",
            charset: &charset,
            mutation_rate: 0.1,
            metric: &Levenshtein,
        };
        let mut rng = create_rng(42);
        for count in [0, 1, 2, 7, 50] {
            let kids = repro.offspring(&couples, count, &mut rng).unwrap();
            assert_eq!(kids.len(), count);
            for kid in &kids {
                assert_eq!(kid.string().chars().count(), 5);
                assert_eq!(kid.distance(), Levenshtein.distance("hello", kid.string()));
            }
        }
    }

    #[test]
    fn test_no_mutation_copies_parents() {
        let charset = CharacterSet::default();
        let survivors = vec![ind("aaaa", "abab"), ind("bbbb", "abab")];
        let couples = couple(&survivors, &Levenshtein).unwrap();
        let repro = Reproduction {
            goal: "abab",
            charset: &charset,
            mutation_rate: 0.0,
            metric: &Levenshtein,
        };
        let kids = repro.offspring(&couples, 20, &mut create_rng(1)).unwrap();
        for kid in &kids {
            assert!(kid.string().chars().all(|c| c == 'a' || c == 'b'));
        }
    }

    #[test]
    fn test_parent_choice_follows_unit_draws() {
        let charset = CharacterSet::default();
        let survivors = vec![ind("aaaa", "abab"), ind("bbbb", "abab")];
        let couples = couple(&survivors, &Levenshtein).unwrap();
        let repro = Reproduction {
            goal: "abab",
            charset: &charset,
            mutation_rate: 0.0,
            metric: &Levenshtein,
        };
        // Each position draws (mutation, parent): alternate first/partner.
        let mut rng = ReplaySource::new(vec![0], vec![0.9, 0.1, 0.9, 0.7]);
        let kids = repro.offspring(&couples, 1, &mut rng).unwrap();
        assert_eq!(kids[0].string(), "abab");
        assert_eq!(kids[0].distance(), 0);
    }

    #[test]
    fn test_full_mutation_draws_from_charset() {
        let charset = CharacterSet::from("xyz");
        let survivors = vec![ind("aaa", "abc")];
        let couples = couple(&survivors, &Levenshtein).unwrap();
        let repro = Reproduction {
            goal: "abc",
            charset: &charset,
            mutation_rate: 1.0,
            metric: &Levenshtein,
        };
        let kids = repro.offspring(&couples, 10, &mut create_rng(9)).unwrap();
        for kid in &kids {
            assert!(kid.string().chars().all(|c| charset.contains(c)));
            assert_eq!(kid.distance(), 3);
        }
    }

    #[test]
    fn test_couples_cycle() {
        let charset = CharacterSet::default();
        let survivors = vec![ind("aaaa", "aaaa"), ind("bbbb", "aaaa"), ind("cccc", "aaaa")];
        let couples = couple(&survivors, &Levenshtein).unwrap();
        let repro = Reproduction {
            goal: "aaaa",
            charset: &charset,
            mutation_rate: 0.0,
            metric: &Levenshtein,
        };
        // Unit 0.0 always copies the first parent of each couple.
        let mut rng = ReplaySource::constant(0, 0.0);
        let kids = repro.offspring(&couples, 5, &mut rng).unwrap();
        let strings: Vec<&str> = kids.iter().map(Individual::string).collect();
        assert_eq!(strings, vec!["aaaa", "bbbb", "cccc", "aaaa", "bbbb"]);
    }

    #[test]
    fn test_empty_couples_rejected() {
        let charset = CharacterSet::default();
        let repro = Reproduction {
            goal: "abc",
            charset: &charset,
            mutation_rate: 0.0,
            metric: &Levenshtein,
        };
        let mut rng = create_rng(0);
        assert!(matches!(
            repro.offspring(&[], 3, &mut rng),
            Err(EvolverError::InternalInvariantViolation(_))
        ));
        assert!(repro.offspring(&[], 0, &mut rng).unwrap().is_empty());
    }
}
