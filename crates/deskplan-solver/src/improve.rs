//! Swap-based local search.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use deskplan_core::ids::DayId;
use deskplan_core::{Assignment, Model};

use crate::scoring::score;

/// Knobs for one local search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImproveOptions {
    pub seed: u64,
    /// Swap trials to attempt.
    pub iterations: u64,
}

impl Default for ImproveOptions {
    fn default() -> Self {
        ImproveOptions {
            seed: 42,
            iterations: 1000,
        }
    }
}

/// Counters describing one local search pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Trials attempted, including skipped ones.
    pub trials: u64,
    /// Swaps that improved the score and were kept.
    pub accepted: u64,
    /// Trials that landed on a day with fewer than two seated employees.
    pub skipped: u64,
}

/// The improved assignment plus search counters.
#[derive(Debug, Clone)]
pub struct ImproveResult {
    pub assignment: Assignment,
    pub stats: SearchStats,
}

/// Improves an assignment by random same-day desk swaps.
///
/// Each trial picks a day, then two distinct seated employees on it, swaps
/// their desks, and keeps the swap only when the score strictly improves.
/// Everything else is rolled back, so the result never scores worse than
/// the input. The input assignment itself is left untouched.
pub fn improve(model: &Model, assignment: &Assignment, options: &ImproveOptions) -> ImproveResult {
    let mut working = assignment.clone();
    let mut stats = SearchStats::default();
    if model.day_count() == 0 {
        return ImproveResult {
            assignment: working,
            stats,
        };
    }

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut current = score(model, &working);

    for _ in 0..options.iterations {
        stats.trials += 1;
        let day = DayId::new(rng.random_range(0..model.day_count()));
        let seated = working.seated_on(day);
        if seated.len() < 2 {
            stats.skipped += 1;
            continue;
        }
        let pair = index::sample(&mut rng, seated.len(), 2);
        let a = seated[pair.index(0)];
        let b = seated[pair.index(1)];

        working.swap(day, a, b);
        let candidate = score(model, &working);
        if candidate > current {
            stats.accepted += 1;
            debug!(
                event = "swap_accepted",
                day = model.day_name(day),
                a = model.employee_name(a),
                b = model.employee_name(b),
                score = %candidate,
            );
            current = candidate;
        } else {
            working.swap(day, a, b);
        }
    }

    ImproveResult {
        assignment: working,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskplan_core::ids::{DeskId, EmployeeId};
    use deskplan_core::{validate, Instance, PlanScore, SolutionDocument};

    use crate::construct::{construct, ConstructOptions};

    fn model(json: &str) -> Model {
        Model::build(&Instance::from_json_str(json).unwrap())
    }

    #[test]
    fn finds_the_preference_repairing_swap() {
        let model = model(
            r#"{
                "Employees": ["a", "b"],
                "Desks": ["d1", "d2"],
                "Days": ["mon"],
                "Desks_E": {"b": ["d1"]}
            }"#,
        );
        // a occupies b's preferred desk.
        let mut assignment = Assignment::blank(&model);
        assignment.set(DayId::new(0), EmployeeId::new(0), Some(DeskId::new(0)));
        assignment.set(DayId::new(0), EmployeeId::new(1), Some(DeskId::new(1)));
        assert_eq!(score(&model, &assignment), PlanScore::ZERO);

        let result = improve(
            &model,
            &assignment,
            &ImproveOptions {
                seed: 3,
                iterations: 20,
            },
        );

        // The only possible swap fixes it on the first trial; every later
        // trial would undo it and is rejected.
        assert_eq!(score(&model, &result.assignment), PlanScore::of(1, 0, 0));
        assert_eq!(result.stats.trials, 20);
        assert_eq!(result.stats.accepted, 1);
        assert_eq!(result.stats.skipped, 0);
    }

    #[test]
    fn symmetric_preferences_leave_nothing_to_gain() {
        let model = model(
            r#"{
                "Employees": ["A", "B"],
                "Desks": ["D1", "D2"],
                "Days": ["Mon"],
                "Desks_E": {"A": ["D1"], "B": ["D1"]}
            }"#,
        );
        let constructed = construct(
            &model,
            &ConstructOptions {
                seed: 1,
                ..ConstructOptions::default()
            },
        );
        assert_eq!(score(&model, &constructed), PlanScore::of(1, 0, 0));

        let result = improve(
            &model,
            &constructed,
            &ImproveOptions {
                seed: 1,
                iterations: 100,
            },
        );

        // Swapping hands D1 to the other claimant, which scores the same,
        // so no swap is ever kept.
        assert_eq!(score(&model, &result.assignment), PlanScore::of(1, 0, 0));
        assert_eq!(result.stats.accepted, 0);
    }

    #[test]
    fn never_scores_worse_than_the_input() {
        let json = r#"{
            "Employees": ["a", "b", "c", "d", "e", "f"],
            "Desks": ["d1", "d2", "d3", "d4", "d5", "d6"],
            "Days": ["mon", "tue"],
            "Desks_E": {"a": ["d3"], "b": ["d3", "d4"], "c": ["d1"], "e": ["d2", "d6"]},
            "Employees_G": {"g1": ["a", "b", "c"], "g2": ["d", "e", "f"]},
            "Desks_Z": {"z1": ["d1", "d2", "d3"], "z2": ["d4", "d5", "d6"]}
        }"#;
        let model = model(json);

        for seed in 0..10 {
            let constructed = construct(
                &model,
                &ConstructOptions {
                    seed,
                    ..ConstructOptions::default()
                },
            );
            let before = score(&model, &constructed);
            let result = improve(
                &model,
                &constructed,
                &ImproveOptions {
                    seed,
                    iterations: 300,
                },
            );
            assert!(score(&model, &result.assignment) >= before);

            // Swapping can never introduce a double booking.
            let document = SolutionDocument::from_assignment(&model, &result.assignment);
            assert_eq!(validate(&model, &document), vec![]);
        }
    }

    #[test]
    fn input_assignment_is_untouched() {
        let model = model(
            r#"{
                "Employees": ["a", "b"],
                "Desks": ["d1", "d2"],
                "Days": ["mon"],
                "Desks_E": {"b": ["d1"]}
            }"#,
        );
        let mut assignment = Assignment::blank(&model);
        assignment.set(DayId::new(0), EmployeeId::new(0), Some(DeskId::new(0)));
        assignment.set(DayId::new(0), EmployeeId::new(1), Some(DeskId::new(1)));
        let original = assignment.clone();

        let result = improve(&model, &assignment, &ImproveOptions::default());

        assert_eq!(assignment, original);
        assert_ne!(result.assignment, original);
    }

    #[test]
    fn zero_iterations_returns_the_input() {
        let model = model(
            r#"{
                "Employees": ["a", "b"],
                "Desks": ["d1", "d2"],
                "Days": ["mon"]
            }"#,
        );
        let constructed = construct(&model, &ConstructOptions::default());

        let result = improve(
            &model,
            &constructed,
            &ImproveOptions {
                seed: 8,
                iterations: 0,
            },
        );

        assert_eq!(result.assignment, constructed);
        assert_eq!(result.stats, SearchStats::default());
    }

    #[test]
    fn days_with_one_seat_are_skipped() {
        let model = model(
            r#"{
                "Employees": ["a"],
                "Desks": ["d1", "d2"],
                "Days": ["mon"]
            }"#,
        );
        let constructed = construct(&model, &ConstructOptions::default());

        let result = improve(
            &model,
            &constructed,
            &ImproveOptions {
                seed: 2,
                iterations: 50,
            },
        );

        assert_eq!(result.assignment, constructed);
        assert_eq!(result.stats.trials, 50);
        assert_eq!(result.stats.skipped, 50);
        assert_eq!(result.stats.accepted, 0);
    }

    #[test]
    fn same_seed_reproduces_the_search() {
        let json = r#"{
            "Employees": ["a", "b", "c", "d"],
            "Desks": ["d1", "d2", "d3", "d4"],
            "Days": ["mon", "tue"],
            "Desks_E": {"a": ["d4"], "b": ["d3"], "c": ["d2"], "d": ["d1"]}
        }"#;
        let model = model(json);
        let constructed = construct(&model, &ConstructOptions::default());
        let options = ImproveOptions {
            seed: 77,
            iterations: 200,
        };

        let first = improve(&model, &constructed, &options);
        let second = improve(&model, &constructed, &options);

        assert_eq!(first.assignment, second.assignment);
        assert_eq!(first.stats, second.stats);
    }
}
