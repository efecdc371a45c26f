//! CSV exports of a solved plan.

use std::error::Error;
use std::path::Path;

use deskplan_core::ids::DayId;
use deskplan_core::{Assignment, Model};
use deskplan_solver::day_breakdowns;

/// Writes the three export tables into `dir`.
///
/// `EmployeeAssignment.csv` holds one row per employee with their desk per
/// day (`none` when unseated), `Groups_Meeting_day.csv` names the day each
/// group has the most members seated, and `Summary.csv` collects plan-wide
/// quality metrics.
pub fn write_csv_exports(
    model: &Model,
    assignment: &Assignment,
    dir: &Path,
) -> Result<(), Box<dyn Error>> {
    write_employee_assignments(model, assignment, &dir.join("EmployeeAssignment.csv"))?;
    write_group_meeting_days(model, assignment, &dir.join("Groups_Meeting_day.csv"))?;
    write_summary(model, assignment, &dir.join("Summary.csv"))?;
    Ok(())
}

fn write_employee_assignments(
    model: &Model,
    assignment: &Assignment,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut header = vec!["Employee".to_owned()];
    header.extend(model.days().map(|day| model.day_name(day).to_owned()));
    writer.write_record(&header)?;
    for employee in model.employees() {
        let mut row = vec![model.employee_name(employee).to_owned()];
        for day in model.days() {
            row.push(match assignment.get(day, employee) {
                Some(desk) => model.desk_name(desk).to_owned(),
                None => "none".to_owned(),
            });
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_group_meeting_days(
    model: &Model,
    assignment: &Assignment,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Group", "MeetingDay"])?;
    for group in model.groups() {
        // Earliest day wins ties, and stands in when nobody ever shows up.
        let mut best: Option<(DayId, usize)> = None;
        for day in model.days() {
            let seated = model
                .members(group)
                .iter()
                .filter(|&&member| assignment.get(day, member).is_some())
                .count();
            match best {
                Some((_, best_count)) if seated <= best_count => {}
                _ => best = Some((day, seated)),
            }
        }
        let meeting_day = best.map(|(day, _)| model.day_name(day)).unwrap_or("");
        writer.write_record([model.group_name(group), meeting_day])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_summary(
    model: &Model,
    assignment: &Assignment,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let breakdowns = day_breakdowns(model, assignment);
    let preference: i64 = breakdowns.iter().map(|b| b.preference).sum();
    let cohesion: i64 = breakdowns.iter().map(|b| b.cohesion).sum();
    let balance: i64 = breakdowns.iter().map(|b| b.balance).sum();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Valid_assignments",
        "Employee_preferences",
        "Isolated_employees",
        "C2",
        "C3",
    ])?;
    writer.write_record([
        assignment.assigned_count().to_string(),
        preference.to_string(),
        isolated_employees(model, assignment).to_string(),
        cohesion.to_string(),
        balance.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

/// Seated employees who are their group's only member in their zone that day.
fn isolated_employees(model: &Model, assignment: &Assignment) -> usize {
    let zone_count = model.zone_count();
    let mut isolated = 0;
    for day in model.days() {
        let mut clusters = vec![0usize; model.group_count() * zone_count];
        for employee in model.employees() {
            let Some(desk) = assignment.get(day, employee) else {
                continue;
            };
            if let (Some(group), Some(zone)) = (model.group_of(employee), model.zone_of(desk)) {
                clusters[group.index() * zone_count + zone.index()] += 1;
            }
        }
        isolated += clusters.iter().filter(|&&count| count == 1).count();
    }
    isolated
}
