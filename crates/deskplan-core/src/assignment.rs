//! Day-major seating matrix.

use crate::ids::{DayId, DeskId, EmployeeId};
use crate::model::Model;

/// A desk assignment: for every day, every employee's desk (or none).
///
/// Stored day-major, so a day's seating is one contiguous row. The planner
/// only ever fills seats for employees present on a day; everyone else stays
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    rows: Vec<Vec<Option<DeskId>>>,
}

impl Assignment {
    /// An assignment with every seat empty.
    pub fn blank(model: &Model) -> Self {
        Assignment {
            rows: vec![vec![None; model.employee_count()]; model.day_count()],
        }
    }

    /// Desk of `employee` on `day`, if seated.
    pub fn get(&self, day: DayId, employee: EmployeeId) -> Option<DeskId> {
        self.rows[day.index()][employee.index()]
    }

    /// Seats (or unseats) `employee` on `day`.
    pub fn set(&mut self, day: DayId, employee: EmployeeId, desk: Option<DeskId>) {
        self.rows[day.index()][employee.index()] = desk;
    }

    /// Exchanges the desks of two employees on one day.
    pub fn swap(&mut self, day: DayId, a: EmployeeId, b: EmployeeId) {
        self.rows[day.index()].swap(a.index(), b.index());
    }

    /// Total number of filled seats across all days.
    pub fn assigned_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|seat| seat.is_some()).count())
            .sum()
    }

    /// Employees seated on `day`, in roster order.
    pub fn seated_on(&self, day: DayId) -> Vec<EmployeeId> {
        self.rows[day.index()]
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_some())
            .map(|(index, _)| EmployeeId::new(index))
            .collect()
    }
}
