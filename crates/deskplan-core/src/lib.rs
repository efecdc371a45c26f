//! Deskplan Core - Domain model for desk assignment planning
//!
//! This crate provides the data layer shared by the solver and its
//! collaborators:
//! - The instance file format and its compiled, index-based model
//! - The day-major assignment container
//! - The lexicographic three-criterion score
//! - The external solution document form and its structural validator

pub mod assignment;
pub mod error;
pub mod ids;
pub mod instance;
pub mod model;
pub mod score;
pub mod solution;
pub mod validate;

pub use assignment::Assignment;
pub use error::ModelError;
pub use ids::{DayId, DeskId, EmployeeId, GroupId, ZoneId};
pub use instance::Instance;
pub use model::Model;
pub use score::PlanScore;
pub use solution::SolutionDocument;
pub use validate::{validate, Violation};
