//! Instance file model.
//!
//! The on-disk JSON shape of a planning problem: ordered identifier lists
//! plus roster maps keyed by those identifiers. Field names follow the
//! established instance format; map and list order is preserved because the
//! resolution rules for irregular rosters depend on it.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A desk assignment problem instance as stored on disk.
///
/// # Examples
///
/// ```
/// use deskplan_core::Instance;
///
/// let instance = Instance::from_json_str(r#"{
///     "Employees": ["ana", "bo"],
///     "Desks": ["d1", "d2"],
///     "Days": ["mon"],
///     "Desks_E": {"ana": ["d1"]},
///     "Employees_G": {"g1": ["ana", "bo"]},
///     "Desks_Z": {"z1": ["d1", "d2"]}
/// }"#).unwrap();
///
/// assert_eq!(instance.employees, vec!["ana", "bo"]);
/// assert!(instance.presence.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instance {
    /// Employee identifiers, in roster order.
    #[serde(rename = "Employees")]
    pub employees: Vec<String>,

    /// Desk identifiers, in roster order.
    #[serde(rename = "Desks")]
    pub desks: Vec<String>,

    /// Planning days, in planning order.
    #[serde(rename = "Days")]
    pub days: Vec<String>,

    /// Ordered desk preferences per employee.
    #[serde(rename = "Desks_E", default)]
    pub preferences: IndexMap<String, Vec<String>>,

    /// Group rosters.
    #[serde(rename = "Employees_G", default)]
    pub groups: IndexMap<String, Vec<String>>,

    /// Present days per employee. Absent (or empty) means every employee
    /// attends every day; an employee missing from a non-empty calendar is
    /// present on no day.
    #[serde(rename = "Days_E", default)]
    pub presence: Option<IndexMap<String, Vec<String>>>,

    /// Zone rosters.
    #[serde(rename = "Desks_Z", default)]
    pub zones: IndexMap<String, Vec<String>>,
}

impl Instance {
    /// Loads an instance from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses an instance from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }
}
