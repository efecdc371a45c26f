//! Lexicographic scoring of assignments.
//!
//! Every criterion is computed per day and summed: preference hits, group
//! cohesion (per group, the largest number of members seated in one zone),
//! and zone balance (zero or negative; the negated occupancy spread across
//! zones that seat anyone). Desks outside any zone count for preferences
//! but play no part in cohesion or balance.

use deskplan_core::ids::DayId;
use deskplan_core::{Assignment, Model, PlanScore};

/// One day's scoring diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBreakdown {
    /// Employees seated that day.
    pub assigned: usize,
    /// Seated employees whose desk is on their preference list.
    pub preference: i64,
    /// Sum over groups of the largest same-zone member cluster.
    pub cohesion: i64,
    /// Negated spread between the fullest and emptiest occupied zone.
    pub balance: i64,
}

impl DayBreakdown {
    /// The day's contribution to the plan score.
    pub fn score(&self) -> PlanScore {
        PlanScore::of(self.preference, self.cohesion, self.balance)
    }
}

/// Scores a full assignment.
pub fn score(model: &Model, assignment: &Assignment) -> PlanScore {
    model
        .days()
        .map(|day| score_day(model, assignment, day).score())
        .fold(PlanScore::ZERO, |total, day| total + day)
}

/// Per-day diagnostics, in day order.
pub fn day_breakdowns(model: &Model, assignment: &Assignment) -> Vec<DayBreakdown> {
    model
        .days()
        .map(|day| score_day(model, assignment, day))
        .collect()
}

fn score_day(model: &Model, assignment: &Assignment, day: DayId) -> DayBreakdown {
    let zone_count = model.zone_count();
    let mut assigned = 0usize;
    let mut preference = 0i64;
    // clusters[group * zone_count + zone]: seated members of the group in the zone.
    let mut clusters = vec![0i64; model.group_count() * zone_count];
    let mut occupancy = vec![0i64; zone_count];

    for employee in model.employees() {
        let Some(desk) = assignment.get(day, employee) else {
            continue;
        };
        assigned += 1;
        if model.prefers(employee, desk) {
            preference += 1;
        }
        if let Some(zone) = model.zone_of(desk) {
            occupancy[zone.index()] += 1;
            if let Some(group) = model.group_of(employee) {
                clusters[group.index() * zone_count + zone.index()] += 1;
            }
        }
    }

    let mut cohesion = 0i64;
    for group in 0..model.group_count() {
        let row = &clusters[group * zone_count..(group + 1) * zone_count];
        cohesion += row.iter().copied().max().unwrap_or(0);
    }

    let mut min = i64::MAX;
    let mut max = 0i64;
    for &count in &occupancy {
        if count > 0 {
            min = min.min(count);
            max = max.max(count);
        }
    }
    let balance = if max > 0 { min - max } else { 0 };

    DayBreakdown {
        assigned,
        preference,
        cohesion,
        balance,
    }
}
