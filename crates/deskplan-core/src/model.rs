//! Compiled instance model.
//!
//! Interns the string identifier spaces of an [`Instance`] into dense
//! indices and resolves the derived lookups the planner needs at solve time:
//! desk to zone, employee to group, and per-day presence. Built once per run
//! and read-only afterwards.
//!
//! Roster irregularities are data-quality conditions, not errors: a desk
//! listed under several zones keeps the last listing, an employee listed in
//! several groups keeps the first, and references to unknown identifiers are
//! skipped. Every such resolution is logged at WARN.

use std::collections::HashMap;

use tracing::warn;

use crate::ids::{DayId, DeskId, EmployeeId, GroupId, ZoneId};
use crate::instance::Instance;

/// A compiled instance: dense id spaces plus derived lookups.
#[derive(Debug, Clone)]
pub struct Model {
    employee_names: Vec<String>,
    desk_names: Vec<String>,
    day_names: Vec<String>,
    group_names: Vec<String>,
    zone_count: usize,
    desk_index: HashMap<String, DeskId>,
    /// Ordered desk preferences per employee, unknown desks dropped.
    preferences: Vec<Vec<DeskId>>,
    /// Zone of each desk; the last zone roster naming a desk wins.
    desk_zone: Vec<Option<ZoneId>>,
    /// Group of each employee; the first group roster naming an employee wins.
    employee_group: Vec<Option<GroupId>>,
    /// Effective members per group, in group roster order.
    group_members: Vec<Vec<EmployeeId>>,
    /// presence[employee][day]; `None` when the instance has no calendar.
    presence: Option<Vec<Vec<bool>>>,
}

impl Model {
    /// Compiles an instance into a model.
    pub fn build(instance: &Instance) -> Self {
        let (employee_names, employee_lookup) = intern("employee", &instance.employees);
        let (desk_names, desk_lookup) = intern("desk", &instance.desks);
        let (day_names, day_lookup) = intern("day", &instance.days);

        let mut desk_zone = vec![None; desk_names.len()];
        let mut zone_count = 0usize;
        for (zone_name, desks) in &instance.zones {
            let zone = ZoneId::new(zone_count);
            zone_count += 1;
            for desk_name in desks {
                match desk_lookup.get(desk_name) {
                    Some(&index) => {
                        if desk_zone[index].is_some() {
                            warn!(
                                event = "desk_in_multiple_zones",
                                desk = %desk_name,
                                zone = %zone_name,
                                "last listing wins"
                            );
                        }
                        desk_zone[index] = Some(zone);
                    }
                    None => warn!(
                        event = "unknown_desk_in_zone",
                        desk = %desk_name,
                        zone = %zone_name,
                        "entry skipped"
                    ),
                }
            }
        }

        let mut employee_group = vec![None; employee_names.len()];
        let mut group_names = Vec::with_capacity(instance.groups.len());
        let mut group_members: Vec<Vec<EmployeeId>> = Vec::with_capacity(instance.groups.len());
        for (group_name, members) in &instance.groups {
            let group = GroupId::new(group_names.len());
            group_names.push(group_name.clone());
            group_members.push(Vec::new());
            for member_name in members {
                match employee_lookup.get(member_name) {
                    Some(&index) => {
                        if employee_group[index].is_none() {
                            employee_group[index] = Some(group);
                            group_members[group.index()].push(EmployeeId::new(index));
                        } else {
                            warn!(
                                event = "employee_already_grouped",
                                employee = %member_name,
                                group = %group_name,
                                "first listing wins"
                            );
                        }
                    }
                    None => warn!(
                        event = "unknown_employee_in_group",
                        employee = %member_name,
                        group = %group_name,
                        "entry skipped"
                    ),
                }
            }
        }

        let mut preferences = vec![Vec::new(); employee_names.len()];
        for (employee_name, desks) in &instance.preferences {
            let Some(&index) = employee_lookup.get(employee_name) else {
                warn!(
                    event = "unknown_employee_in_preferences",
                    employee = %employee_name,
                    "entry skipped"
                );
                continue;
            };
            let mut interned = Vec::with_capacity(desks.len());
            for desk_name in desks {
                match desk_lookup.get(desk_name) {
                    Some(&desk) => interned.push(DeskId::new(desk)),
                    None => warn!(
                        event = "unknown_desk_in_preferences",
                        employee = %employee_name,
                        desk = %desk_name,
                        "preference dropped"
                    ),
                }
            }
            preferences[index] = interned;
        }

        // An empty calendar means universal presence, same as no calendar.
        let presence = match &instance.presence {
            Some(calendar) if !calendar.is_empty() => {
                let mut matrix = vec![vec![false; day_names.len()]; employee_names.len()];
                for (employee_name, present_days) in calendar {
                    let Some(&employee) = employee_lookup.get(employee_name) else {
                        warn!(
                            event = "unknown_employee_in_calendar",
                            employee = %employee_name,
                            "entry skipped"
                        );
                        continue;
                    };
                    for day_name in present_days {
                        match day_lookup.get(day_name) {
                            Some(&day) => matrix[employee][day] = true,
                            None => warn!(
                                event = "unknown_day_in_calendar",
                                employee = %employee_name,
                                day = %day_name,
                                "entry skipped"
                            ),
                        }
                    }
                }
                Some(matrix)
            }
            _ => None,
        };

        let desk_index = desk_lookup
            .into_iter()
            .map(|(name, index)| (name, DeskId::new(index)))
            .collect();

        Model {
            employee_names,
            desk_names,
            day_names,
            group_names,
            zone_count,
            desk_index,
            preferences,
            desk_zone,
            employee_group,
            group_members,
            presence,
        }
    }

    /// Number of employees.
    pub fn employee_count(&self) -> usize {
        self.employee_names.len()
    }

    /// Number of desks.
    pub fn desk_count(&self) -> usize {
        self.desk_names.len()
    }

    /// Number of planning days.
    pub fn day_count(&self) -> usize {
        self.day_names.len()
    }

    /// Number of zones.
    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.group_names.len()
    }

    /// Employee ids in roster order.
    pub fn employees(&self) -> impl Iterator<Item = EmployeeId> {
        (0..self.employee_names.len()).map(EmployeeId::new)
    }

    /// Desk ids in roster order.
    pub fn desks(&self) -> impl Iterator<Item = DeskId> {
        (0..self.desk_names.len()).map(DeskId::new)
    }

    /// Day ids in planning order.
    pub fn days(&self) -> impl Iterator<Item = DayId> {
        (0..self.day_names.len()).map(DayId::new)
    }

    /// Group ids in roster order.
    pub fn groups(&self) -> impl Iterator<Item = GroupId> {
        (0..self.group_names.len()).map(GroupId::new)
    }

    /// Name of an employee.
    pub fn employee_name(&self, employee: EmployeeId) -> &str {
        &self.employee_names[employee.index()]
    }

    /// Name of a desk.
    pub fn desk_name(&self, desk: DeskId) -> &str {
        &self.desk_names[desk.index()]
    }

    /// Name of a day.
    pub fn day_name(&self, day: DayId) -> &str {
        &self.day_names[day.index()]
    }

    /// Name of a group.
    pub fn group_name(&self, group: GroupId) -> &str {
        &self.group_names[group.index()]
    }

    /// Looks up a desk by name.
    pub fn desk_id(&self, name: &str) -> Option<DeskId> {
        self.desk_index.get(name).copied()
    }

    /// Ordered desk preferences of an employee.
    pub fn preferences(&self, employee: EmployeeId) -> &[DeskId] {
        &self.preferences[employee.index()]
    }

    /// Whether `desk` is on the employee's preference list.
    pub fn prefers(&self, employee: EmployeeId, desk: DeskId) -> bool {
        self.preferences[employee.index()].contains(&desk)
    }

    /// Zone of a desk, if it belongs to one.
    pub fn zone_of(&self, desk: DeskId) -> Option<ZoneId> {
        self.desk_zone[desk.index()]
    }

    /// Group of an employee, if they belong to one.
    pub fn group_of(&self, employee: EmployeeId) -> Option<GroupId> {
        self.employee_group[employee.index()]
    }

    /// Effective members of a group, in roster order.
    pub fn members(&self, group: GroupId) -> &[EmployeeId] {
        &self.group_members[group.index()]
    }

    /// Employees present on `day`, in roster order.
    ///
    /// Without a presence calendar every employee attends every day.
    pub fn present_on(&self, day: DayId) -> Vec<EmployeeId> {
        match &self.presence {
            None => self.employees().collect(),
            Some(matrix) => self
                .employees()
                .filter(|employee| matrix[employee.index()][day.index()])
                .collect(),
        }
    }
}

fn intern(kind: &'static str, names: &[String]) -> (Vec<String>, HashMap<String, usize>) {
    let mut interned = Vec::with_capacity(names.len());
    let mut lookup = HashMap::with_capacity(names.len());
    for name in names {
        if lookup.contains_key(name) {
            warn!(
                event = "duplicate_identifier",
                kind,
                id = %name,
                "duplicate roster entry ignored"
            );
            continue;
        }
        lookup.insert(name.clone(), interned.len());
        interned.push(name.clone());
    }
    (interned, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> Instance {
        Instance::from_json_str(
            r#"{
                "Employees": ["e1", "e2", "e3", "e4"],
                "Desks": ["d1", "d2", "d3", "d4"],
                "Days": ["mon", "tue"],
                "Desks_E": {"e1": ["d1", "d9"], "e3": ["d3"]},
                "Employees_G": {"g1": ["e1", "e2"], "g2": ["e2", "ghost"]},
                "Desks_Z": {"z1": ["d1", "d2"], "z2": ["d2", "d3"]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn desk_zone_resolution_last_listing_wins() {
        let model = Model::build(&office());

        assert_eq!(model.zone_of(DeskId::new(0)), Some(ZoneId::new(0)));
        // d2 appears under z1 and z2; z2 is listed later.
        assert_eq!(model.zone_of(DeskId::new(1)), Some(ZoneId::new(1)));
        assert_eq!(model.zone_of(DeskId::new(2)), Some(ZoneId::new(1)));
        assert_eq!(model.zone_of(DeskId::new(3)), None);
        assert_eq!(model.zone_count(), 2);
    }

    #[test]
    fn employee_group_resolution_first_listing_wins() {
        let model = Model::build(&office());

        assert_eq!(model.group_of(EmployeeId::new(0)), Some(GroupId::new(0)));
        // e2 appears in g1 and g2; g1 is listed first.
        assert_eq!(model.group_of(EmployeeId::new(1)), Some(GroupId::new(0)));
        assert_eq!(model.group_of(EmployeeId::new(2)), None);
        assert_eq!(
            model.members(GroupId::new(0)),
            &[EmployeeId::new(0), EmployeeId::new(1)]
        );
        assert!(model.members(GroupId::new(1)).is_empty());
    }

    #[test]
    fn unknown_preference_desks_are_dropped() {
        let model = Model::build(&office());

        assert_eq!(model.preferences(EmployeeId::new(0)), &[DeskId::new(0)]);
        assert!(model.prefers(EmployeeId::new(2), DeskId::new(2)));
        assert!(model.preferences(EmployeeId::new(1)).is_empty());
    }

    #[test]
    fn missing_calendar_means_universal_presence() {
        let model = Model::build(&office());

        let all: Vec<EmployeeId> = model.employees().collect();
        assert_eq!(model.present_on(DayId::new(0)), all);
        assert_eq!(model.present_on(DayId::new(1)), all);
    }

    #[test]
    fn empty_calendar_means_universal_presence() {
        let instance = Instance::from_json_str(
            r#"{
                "Employees": ["e1", "e2"],
                "Desks": ["d1"],
                "Days": ["mon"],
                "Days_E": {}
            }"#,
        )
        .unwrap();
        let model = Model::build(&instance);

        assert_eq!(
            model.present_on(DayId::new(0)),
            vec![EmployeeId::new(0), EmployeeId::new(1)]
        );
    }

    #[test]
    fn calendar_absence_is_per_day_and_unlisted_means_never_present() {
        let instance = Instance::from_json_str(
            r#"{
                "Employees": ["e1", "e2"],
                "Desks": ["d1"],
                "Days": ["mon", "tue"],
                "Days_E": {"e1": ["tue"]}
            }"#,
        )
        .unwrap();
        let model = Model::build(&instance);

        assert!(model.present_on(DayId::new(0)).is_empty());
        assert_eq!(model.present_on(DayId::new(1)), vec![EmployeeId::new(0)]);
    }

    #[test]
    fn desk_lookup_by_name() {
        let model = Model::build(&office());

        assert_eq!(model.desk_id("d3"), Some(DeskId::new(2)));
        assert_eq!(model.desk_id("d9"), None);
    }
}
