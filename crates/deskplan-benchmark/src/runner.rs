//! Experiment execution.

use deskplan_config::PlannerConfig;
use deskplan_core::Model;
use deskplan_solver::solve;
use rayon::prelude::*;

use crate::config::{ExperimentPlan, Method};
use crate::result::{ExperimentResults, RunRecord};

/// Runs an experiment plan over a set of labeled instances.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    plan: ExperimentPlan,
}

impl ExperimentRunner {
    pub fn new(plan: ExperimentPlan) -> Self {
        ExperimentRunner { plan }
    }

    /// Executes every (instance, method, seed) combination of the plan.
    ///
    /// Runs execute in parallel, but the records come back in plan order:
    /// instances outermost, then methods, then seeds.
    pub fn run(&self, instances: &[(String, Model)]) -> ExperimentResults {
        let mut jobs = Vec::new();
        for (label, model) in instances {
            for &method in self.plan.methods() {
                for seed in self.plan.seeds() {
                    jobs.push((label.as_str(), model, method, seed));
                }
            }
        }

        let records: Vec<RunRecord> = jobs
            .par_iter()
            .map(|&(label, model, method, seed)| self.run_once(label, model, method, seed))
            .collect();

        let mut results = ExperimentResults::new();
        for record in records {
            results.push(record);
        }
        results
    }

    fn run_once(&self, label: &str, model: &Model, method: Method, seed: u64) -> RunRecord {
        let config = PlannerConfig::new()
            .with_seed(seed)
            .with_top_k(self.plan.top_k())
            .with_iterations(self.plan.iterations())
            .with_local_search(matches!(method, Method::Local));
        let outcome = solve(model, &config);
        RunRecord {
            instance: label.to_owned(),
            method,
            seed,
            iterations: match method {
                Method::Local => self.plan.iterations(),
                Method::NoLocal => 0,
            },
            top_k: self.plan.top_k(),
            score: outcome.final_score,
            runtime: outcome.elapsed,
        }
    }
}
