//! Property-based tests for u-evolver
//!
//! Uses proptest to verify population, ordering, distance and convergence
//! invariants over random configurations.

use proptest::prelude::*;
use u_evolver::evolver::{
    couple, create_rng, generate_seeds, plateau_reached, CharacterSet, DistanceMetric, Evolver,
    EvolverConfig, Individual, Levenshtein,
};

fn goal_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{1,12}"
}

fn config_strategy() -> impl Strategy<Value = EvolverConfig> {
    (
        goal_strategy(),
        2usize..40,
        0.1f64..=1.0,
        0.0f64..=0.3,
        1usize..6,
        any::<u64>(),
    )
        .prop_map(|(goal, size, survival, mutation, limit, seed)| {
            EvolverConfig::new(goal)
                .with_population_size(size)
                .with_survival_rate(survival)
                .with_mutation_rate(mutation)
                .with_converged_limit(limit)
                .with_seed(seed)
        })
        .prop_filter("at least one survivor", |c| c.survivor_count() >= 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // ==================== Distance Properties ====================

    #[test]
    fn distance_to_self_is_zero(s in "[a-z ]{0,20}") {
        prop_assert_eq!(Levenshtein.distance(&s, &s), 0);
    }

    #[test]
    fn distance_symmetric(a in "[a-z ]{0,15}", b in "[a-z ]{0,15}") {
        prop_assert_eq!(Levenshtein.distance(&a, &b), Levenshtein.distance(&b, &a));
    }

    #[test]
    fn distance_zero_only_when_equal(a in "[a-c]{0,6}", b in "[a-c]{0,6}") {
        let d = Levenshtein.distance(&a, &b);
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn distance_bounded_by_longer_length(a in "[a-z]{0,15}", b in "[a-z]{0,15}") {
        let d = Levenshtein.distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    // ==================== Seed Properties ====================

    #[test]
    fn seeds_sized_sorted_and_reproducible(goal in goal_strategy(), size in 1usize..60, seed in any::<u64>()) {
        let charset = CharacterSet::default();
        let a = generate_seeds(size, &goal, &charset, &Levenshtein, &mut create_rng(seed)).unwrap();
        let b = generate_seeds(size, &goal, &charset, &Levenshtein, &mut create_rng(seed)).unwrap();

        prop_assert_eq!(a.len(), size);
        let d = a.distances();
        prop_assert!(d.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(a, b);
    }

    // ==================== Coupler Properties ====================

    #[test]
    fn couples_pick_a_maximal_partner(strings in prop::collection::vec("[a-d]{4}", 1..12)) {
        let survivors: Vec<Individual> = strings
            .into_iter()
            .map(|s| Individual::evaluated(s, "abcd", &Levenshtein))
            .collect();
        let couples = couple(&survivors, &Levenshtein).unwrap();

        prop_assert_eq!(couples.len(), survivors.len());
        for (first, partner) in &couples {
            let chosen = Levenshtein.distance(first.string(), partner.string());
            let max = survivors
                .iter()
                .map(|s| Levenshtein.distance(first.string(), s.string()))
                .max()
                .unwrap_or(0);
            prop_assert_eq!(chosen, max);
        }
    }

    // ==================== Run Properties ====================

    #[test]
    fn runs_preserve_population_and_order(config in config_strategy()) {
        let size = config.population_size;
        let limit = config.converged_limit;
        let goal_len = config.goal_len();
        let result = Evolver::new(config).unwrap().run_to_convergence().unwrap();

        prop_assert!(result.converged);
        prop_assert!(result.history.len() >= limit);
        for gen in &result.history {
            prop_assert_eq!(gen.len(), size);
            let d = gen.distances();
            prop_assert!(d.windows(2).all(|w| w[0] <= w[1]));
        }

        let tail = &result.history[result.history.len() - limit..];
        let first = tail[0].best_distance();
        prop_assert!(tail.iter().all(|g| g.best_distance() == first));
        prop_assert!(plateau_reached(&result.history, limit));

        // Survivors carry the best over, so the best distance only drops.
        for w in result.series.windows(2) {
            prop_assert!(w[1].best_distance <= w[0].best_distance);
        }
        let bound = ((goal_len + 1) * (limit - 1) + 1).max(2);
        prop_assert!(result.history.len() <= bound);
    }
}
