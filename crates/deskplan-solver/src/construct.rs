//! Randomized greedy construction.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use deskplan_core::ids::{DeskId, EmployeeId, ZoneId};
use deskplan_core::{Assignment, Model};

/// Knobs for one construction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructOptions {
    pub seed: u64,
    /// Shuffle seating order and draw among the best candidates.
    pub randomize: bool,
    /// Candidate window for randomized draws; treated as at least 1.
    pub top_k: usize,
}

impl Default for ConstructOptions {
    fn default() -> Self {
        ConstructOptions {
            seed: 42,
            randomize: true,
            top_k: 3,
        }
    }
}

/// Builds an assignment greedily, one day at a time.
///
/// Days are independent: each starts with every desk free. Employees are
/// seated in presence order (shuffled when `randomize` is on), and each
/// takes a desk from the best non-empty candidate pool:
///
/// 1. preferred desks in the zone the employee's group is gathering in
/// 2. preferred desks anywhere
/// 3. free desks in that zone
/// 4. any free desk
///
/// The gathering zone is wherever the group has the most members seated so
/// far today; earlier-seen zones win ties. With `randomize` the pick is a
/// uniform draw over the pool's first `top_k` entries, otherwise the first
/// candidate wins. An employee left with no free desk stays unseated.
pub fn construct(model: &Model, options: &ConstructOptions) -> Assignment {
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let top_k = options.top_k.max(1);
    let mut assignment = Assignment::blank(model);

    for day in model.days() {
        let mut order = model.present_on(day);
        if options.randomize {
            order.shuffle(&mut rng);
        }

        let mut used = vec![false; model.desk_count()];
        let mut group_zone: Vec<ZoneTally> = vec![SmallVec::new(); model.group_count()];

        for employee in order {
            let target = model
                .group_of(employee)
                .and_then(|group| target_zone(&group_zone[group.index()]));
            let Some(desk) =
                pick_desk(model, employee, &used, target, top_k, options.randomize, &mut rng)
            else {
                continue;
            };
            used[desk.index()] = true;
            assignment.set(day, employee, Some(desk));
            if let (Some(group), Some(zone)) = (model.group_of(employee), model.zone_of(desk)) {
                tally(&mut group_zone[group.index()], zone);
            }
        }
    }

    assignment
}

/// Zone occupancy counts for one group, in first-seen order.
type ZoneTally = SmallVec<[(ZoneId, i64); 4]>;

fn tally(tallies: &mut ZoneTally, zone: ZoneId) {
    match tallies.iter_mut().find(|(z, _)| *z == zone) {
        Some((_, count)) => *count += 1,
        None => tallies.push((zone, 1)),
    }
}

/// The zone where the group has the most members seated so far.
///
/// Ties keep the zone that entered the tally first, so the outcome is
/// stable for a given seating order.
fn target_zone(tallies: &ZoneTally) -> Option<ZoneId> {
    let mut best: Option<(ZoneId, i64)> = None;
    for &(zone, count) in tallies {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((zone, count)),
        }
    }
    best.map(|(zone, _)| zone)
}

fn pick_desk(
    model: &Model,
    employee: EmployeeId,
    used: &[bool],
    target: Option<ZoneId>,
    top_k: usize,
    randomize: bool,
    rng: &mut ChaCha8Rng,
) -> Option<DeskId> {
    let free = |desk: DeskId| !used[desk.index()];
    let in_target = |desk: DeskId| model.zone_of(desk) == target;

    let mut pool: SmallVec<[DeskId; 8]> = SmallVec::new();
    if target.is_some() {
        pool.extend(
            model
                .preferences(employee)
                .iter()
                .copied()
                .filter(|&desk| free(desk) && in_target(desk)),
        );
    }
    if pool.is_empty() {
        pool.extend(model.preferences(employee).iter().copied().filter(|&desk| free(desk)));
    }
    if pool.is_empty() && target.is_some() {
        pool.extend(model.desks().filter(|&desk| free(desk) && in_target(desk)));
    }
    if pool.is_empty() {
        pool.extend(model.desks().filter(|&desk| free(desk)));
    }
    if pool.is_empty() {
        return None;
    }

    if randomize {
        let window = pool.len().min(top_k);
        Some(pool[rng.random_range(0..window)])
    } else {
        Some(pool[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskplan_core::ids::{DayId, DeskId, EmployeeId};
    use deskplan_core::{validate, Instance, PlanScore, SolutionDocument};

    use crate::scoring::{day_breakdowns, score};

    fn model(json: &str) -> Model {
        Model::build(&Instance::from_json_str(json).unwrap())
    }

    #[test]
    fn rival_preferences_still_yield_one_hit() {
        let model = model(
            r#"{
                "Employees": ["A", "B"],
                "Desks": ["D1", "D2"],
                "Days": ["Mon"],
                "Desks_E": {"A": ["D1"], "B": ["D1"]}
            }"#,
        );

        // Whoever seats first takes D1; the other falls through to D2.
        let assignment = construct(
            &model,
            &ConstructOptions {
                seed: 1,
                ..ConstructOptions::default()
            },
        );

        assert_eq!(score(&model, &assignment), PlanScore::of(1, 0, 0));
        assert_eq!(assignment.assigned_count(), 2);
    }

    #[test]
    fn capacity_forces_a_cluster_of_two() {
        let json = r#"{
            "Employees": ["a", "b", "c"],
            "Desks": ["d1", "d2", "d3"],
            "Days": ["mon"],
            "Employees_G": {"g": ["a", "b", "c"]},
            "Desks_Z": {"za": ["d1", "d2"], "zb": ["d3"]}
        }"#;
        let model = model(json);

        for seed in 0..10 {
            let assignment = construct(
                &model,
                &ConstructOptions {
                    seed,
                    ..ConstructOptions::default()
                },
            );
            // All three seat somewhere, so one zone always holds two of them.
            assert_eq!(assignment.assigned_count(), 3);
            assert_eq!(day_breakdowns(&model, &assignment)[0].cohesion, 2);
        }
    }

    #[test]
    fn deterministic_order_steers_toward_the_gathering_zone() {
        let model = model(
            r#"{
                "Employees": ["E1", "E2", "E3"],
                "Desks": ["D1", "D3", "D2", "D4"],
                "Days": ["Mon"],
                "Desks_E": {"E1": ["D1"], "E2": ["D3"]},
                "Employees_G": {"G": ["E1", "E2", "E3"]},
                "Desks_Z": {"Z1": ["D1", "D2"], "Z2": ["D3", "D4"]}
            }"#,
        );

        let assignment = construct(
            &model,
            &ConstructOptions {
                randomize: false,
                ..ConstructOptions::default()
            },
        );

        let day = DayId::new(0);
        // E1 and E2 sit on their preferred desks; preference beats the zone
        // pull. E3 has none, and with Z1 and Z2 tied at one member each the
        // earlier-seen Z1 wins, so E3 takes the free Z1 desk.
        assert_eq!(assignment.get(day, EmployeeId::new(0)), Some(DeskId::new(0)));
        assert_eq!(assignment.get(day, EmployeeId::new(1)), Some(DeskId::new(1)));
        assert_eq!(assignment.get(day, EmployeeId::new(2)), Some(DeskId::new(2)));
        assert_eq!(score(&model, &assignment), PlanScore::of(2, 2, -1));
    }

    #[test]
    fn preferred_desk_in_the_gathering_zone_wins_over_list_order() {
        let model = model(
            r#"{
                "Employees": ["A", "B"],
                "Desks": ["D1", "D2", "D3", "D4"],
                "Days": ["Mon"],
                "Desks_E": {"A": ["D1"], "B": ["D3", "D2"]},
                "Employees_G": {"G": ["A", "B"]},
                "Desks_Z": {"Z1": ["D1", "D2"], "Z2": ["D3", "D4"]}
            }"#,
        );

        let assignment = construct(
            &model,
            &ConstructOptions {
                randomize: false,
                ..ConstructOptions::default()
            },
        );

        let day = DayId::new(0);
        // A opens Z1 for the group. B lists D3 first, but that desk sits in
        // Z2; D2 is preferred too and lies in the gathering zone, so B joins
        // A there instead of following the list order.
        assert_eq!(assignment.get(day, EmployeeId::new(0)), Some(DeskId::new(0)));
        assert_eq!(assignment.get(day, EmployeeId::new(1)), Some(DeskId::new(1)));
        assert_eq!(score(&model, &assignment), PlanScore::of(2, 2, 0));
    }

    #[test]
    fn same_seed_reproduces_the_assignment() {
        let json = r#"{
            "Employees": ["a", "b", "c", "d", "e"],
            "Desks": ["d1", "d2", "d3", "d4", "d5"],
            "Days": ["mon", "tue", "wed"],
            "Desks_E": {"a": ["d2"], "b": ["d2", "d3"], "d": ["d5"]},
            "Employees_G": {"g1": ["a", "b"], "g2": ["c", "d"]},
            "Desks_Z": {"z1": ["d1", "d2"], "z2": ["d3", "d4", "d5"]}
        }"#;
        let model = model(json);
        let options = ConstructOptions {
            seed: 99,
            ..ConstructOptions::default()
        };

        assert_eq!(construct(&model, &options), construct(&model, &options));
    }

    #[test]
    fn top_k_zero_behaves_like_one() {
        let json = r#"{
            "Employees": ["a", "b", "c", "d"],
            "Desks": ["d1", "d2", "d3", "d4"],
            "Days": ["mon", "tue"]
        }"#;
        let model = model(json);

        let zero = construct(
            &model,
            &ConstructOptions {
                seed: 5,
                randomize: true,
                top_k: 0,
            },
        );
        let one = construct(
            &model,
            &ConstructOptions {
                seed: 5,
                randomize: true,
                top_k: 1,
            },
        );

        assert_eq!(zero, one);
    }

    #[test]
    fn absent_employees_stay_unseated() {
        let model = model(
            r#"{
                "Employees": ["a", "b"],
                "Desks": ["d1", "d2"],
                "Days": ["mon", "tue"],
                "Days_E": {"a": ["mon"]}
            }"#,
        );

        let assignment = construct(&model, &ConstructOptions::default());

        assert!(assignment.get(DayId::new(0), EmployeeId::new(0)).is_some());
        assert_eq!(assignment.get(DayId::new(0), EmployeeId::new(1)), None);
        assert_eq!(assignment.get(DayId::new(1), EmployeeId::new(0)), None);
        assert_eq!(assignment.get(DayId::new(1), EmployeeId::new(1)), None);
    }

    #[test]
    fn desk_shortage_leaves_latecomers_unseated() {
        let model = model(
            r#"{
                "Employees": ["a", "b", "c"],
                "Desks": ["d1", "d2"],
                "Days": ["mon"]
            }"#,
        );

        let assignment = construct(
            &model,
            &ConstructOptions {
                randomize: false,
                ..ConstructOptions::default()
            },
        );

        assert_eq!(assignment.assigned_count(), 2);
        assert_eq!(assignment.get(DayId::new(0), EmployeeId::new(2)), None);
    }

    #[test]
    fn construction_never_double_books_a_desk() {
        let json = r#"{
            "Employees": ["a", "b", "c", "d", "e", "f"],
            "Desks": ["d1", "d2", "d3", "d4"],
            "Days": ["mon", "tue"],
            "Desks_E": {"a": ["d1"], "b": ["d1"], "c": ["d1", "d2"]},
            "Employees_G": {"g1": ["a", "b", "c"], "g2": ["d", "e"]},
            "Desks_Z": {"z1": ["d1", "d2"], "z2": ["d3"]}
        }"#;
        let model = model(json);

        for seed in 0..20 {
            let assignment = construct(
                &model,
                &ConstructOptions {
                    seed,
                    ..ConstructOptions::default()
                },
            );
            let document = SolutionDocument::from_assignment(&model, &assignment);
            assert_eq!(validate(&model, &document), vec![]);
        }
    }
}
