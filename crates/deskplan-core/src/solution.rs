//! Serialized solution document.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::error::ModelError;
use crate::model::Model;

/// The on-disk form of a solution: day name to employee name to desk name.
///
/// Every instance employee has a key on every day; absent or unseated
/// employees are recorded as `null`. Day and employee order follow the
/// instance rosters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionDocument {
    days: IndexMap<String, IndexMap<String, Option<String>>>,
}

impl SolutionDocument {
    /// Renders an assignment back into roster names.
    pub fn from_assignment(model: &Model, assignment: &Assignment) -> Self {
        let mut days = IndexMap::with_capacity(model.day_count());
        for day in model.days() {
            let mut seats = IndexMap::with_capacity(model.employee_count());
            for employee in model.employees() {
                let desk = assignment
                    .get(day, employee)
                    .map(|desk| model.desk_name(desk).to_owned());
                seats.insert(model.employee_name(employee).to_owned(), desk);
            }
            days.insert(model.day_name(day).to_owned(), seats);
        }
        SolutionDocument { days }
    }

    /// Reads a solution document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a solution document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.days)?)
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Seating for one day, if the document has it.
    pub fn day(&self, name: &str) -> Option<&IndexMap<String, Option<String>>> {
        self.days.get(name)
    }

    /// Iterates over days in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Option<String>>)> {
        self.days.iter().map(|(day, seats)| (day.as_str(), seats))
    }

    /// Number of days in the document.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{DayId, DeskId, EmployeeId};
    use crate::instance::Instance;

    fn model() -> Model {
        let instance = Instance::from_json_str(
            r#"{
                "Employees": ["alice", "bob"],
                "Desks": ["d1", "d2"],
                "Days": ["mon", "tue"],
                "Days_E": {"alice": ["mon", "tue"], "bob": ["mon"]}
            }"#,
        )
        .unwrap();
        Model::build(&instance)
    }

    #[test]
    fn from_assignment_gives_every_employee_a_key_every_day() {
        let model = model();
        let mut assignment = Assignment::blank(&model);
        assignment.set(DayId::new(0), EmployeeId::new(0), Some(DeskId::new(1)));

        let document = SolutionDocument::from_assignment(&model, &assignment);

        let monday = document.day("mon").unwrap();
        assert_eq!(monday.get("alice"), Some(&Some("d2".to_owned())));
        assert_eq!(monday.get("bob"), Some(&None));
        // bob is absent on tuesday but still gets an explicit null entry.
        let tuesday = document.day("tue").unwrap();
        assert_eq!(tuesday.len(), 2);
        assert_eq!(tuesday.get("alice"), Some(&None));
        assert_eq!(tuesday.get("bob"), Some(&None));
    }

    #[test]
    fn document_preserves_roster_order() {
        let model = model();
        let assignment = Assignment::blank(&model);

        let document = SolutionDocument::from_assignment(&model, &assignment);

        let days: Vec<&str> = document.iter().map(|(day, _)| day).collect();
        assert_eq!(days, ["mon", "tue"]);
        let monday: Vec<&String> = document.day("mon").unwrap().keys().collect();
        assert_eq!(monday, ["alice", "bob"]);
    }

    #[test]
    fn json_round_trip() {
        let model = model();
        let mut assignment = Assignment::blank(&model);
        assignment.set(DayId::new(1), EmployeeId::new(0), Some(DeskId::new(0)));
        let document = SolutionDocument::from_assignment(&model, &assignment);

        let text = document.to_json_pretty().unwrap();
        let parsed = SolutionDocument::from_json_str(&text).unwrap();

        assert_eq!(parsed, document);
    }

    #[test]
    fn parses_external_document() {
        let document = SolutionDocument::from_json_str(
            r#"{"mon": {"alice": "d1", "bob": null}}"#,
        )
        .unwrap();

        assert_eq!(document.day_count(), 1);
        assert_eq!(
            document.day("mon").unwrap().get("alice"),
            Some(&Some("d1".to_owned()))
        );
    }
}
