//! Structural validation of solution documents.
//!
//! Validation runs on the document form rather than on [`Assignment`](crate::Assignment),
//! so externally produced files get the same checks as freshly solved ones.
//! All violations are collected; nothing short-circuits.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::Model;
use crate::solution::SolutionDocument;

/// A structural defect in a solution document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A planning day has no entry in the document.
    MissingDay { day: String },
    /// Instance employees that do not appear in the day's seating.
    MissingEmployees { day: String, employees: Vec<String> },
    /// Assigned desks the instance does not know.
    UnknownDesks { day: String, desks: Vec<String> },
    /// Desks assigned to more than one employee on the same day.
    DuplicateDesks { day: String, desks: Vec<String> },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingDay { day } => {
                write!(f, "day '{day}' is missing from the solution")
            }
            Violation::MissingEmployees { day, employees } => {
                write!(f, "day '{day}': missing employees: {}", employees.join(", "))
            }
            Violation::UnknownDesks { day, desks } => {
                write!(f, "day '{day}': unknown desks: {}", desks.join(", "))
            }
            Violation::DuplicateDesks { day, desks } => {
                write!(
                    f,
                    "day '{day}': desks assigned more than once: {}",
                    desks.join(", ")
                )
            }
        }
    }
}

/// Checks a solution document against the instance it claims to solve.
///
/// Per day: the day must be present, every instance employee must have an
/// entry (a `null` desk counts, absence does not), every assigned desk must
/// exist, and no desk may seat two employees. Returns every violation found,
/// in day order.
pub fn validate(model: &Model, document: &SolutionDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    for day in model.days() {
        let day_name = model.day_name(day);
        let Some(seats) = document.day(day_name) else {
            violations.push(Violation::MissingDay {
                day: day_name.to_owned(),
            });
            continue;
        };

        let missing: Vec<String> = model
            .employees()
            .map(|employee| model.employee_name(employee))
            .filter(|name| !seats.contains_key(*name))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            violations.push(Violation::MissingEmployees {
                day: day_name.to_owned(),
                employees: missing,
            });
        }

        let mut unknown = BTreeSet::new();
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for desk in seats.values().flatten() {
            if model.desk_id(desk).is_none() {
                unknown.insert(desk.clone());
            }
            *counts.entry(desk.as_str()).or_insert(0) += 1;
        }
        if !unknown.is_empty() {
            violations.push(Violation::UnknownDesks {
                day: day_name.to_owned(),
                desks: unknown.into_iter().collect(),
            });
        }
        let duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(desk, _)| desk.to_owned())
            .collect();
        if !duplicates.is_empty() {
            violations.push(Violation::DuplicateDesks {
                day: day_name.to_owned(),
                desks: duplicates,
            });
        }
    }
    violations
}
