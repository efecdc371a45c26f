//! Experiment harness for the deskplan solver.
//!
//! This crate runs the solver variants side by side over a set of instances
//! and seeds, collecting per-run scores and runtimes, and exports the
//! results:
//! - Plan the run matrix (config module)
//! - Execute runs in parallel (runner module)
//! - Aggregate per-method summaries (result module)
//! - Export CSV and Markdown artifacts (report module)
//!
//! # Example
//!
//! ```
//! use deskplan_benchmark::{ExperimentPlan, Method, SeedSpec};
//!
//! let plan = ExperimentPlan::new()
//!     .with_methods(vec![Method::Local])
//!     .with_seeds(SeedSpec::List(vec![1, 2, 3]))
//!     .with_iterations(500);
//!
//! assert_eq!(plan.runs_per_instance(), 3);
//! ```

pub mod config;
pub mod report;
pub mod result;
pub mod runner;

pub use config::{parse_methods, ExperimentPlan, Method, SeedSpec};
pub use report::{ExperimentCsv, SummaryCsv, SummaryReport};
pub use result::{ExperimentResults, MethodSummary, RunRecord};
pub use runner::ExperimentRunner;
