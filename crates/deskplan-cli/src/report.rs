//! Per-day score reporting.

use owo_colors::OwoColorize;

use deskplan_core::{Assignment, Model};
use deskplan_solver::{day_breakdowns, score};

/// Prints a per-day breakdown table and the plan total.
pub fn print_day_report(model: &Model, assignment: &Assignment) {
    println!();
    println!(
        "{:<12} {:>8} {:>6} {:>9} {:>8}",
        "Day", "Assigned", "Pref", "Cohesion", "Balance"
    );
    for (day, breakdown) in model.days().zip(day_breakdowns(model, assignment)) {
        println!(
            "{:<12} {:>8} {:>6} {:>9} {:>8}",
            model.day_name(day),
            breakdown.assigned,
            breakdown.preference,
            breakdown.cohesion,
            breakdown.balance
        );
    }
    println!();
    println!("total {}", score(model, assignment).bright_cyan());
}
