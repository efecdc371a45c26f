//! Experiment result types.

use std::time::Duration;

use deskplan_core::PlanScore;

use crate::config::Method;

/// Result of a single solver run.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Instance label, usually the file stem.
    pub instance: String,
    pub method: Method,
    pub seed: u64,
    /// Local search trials; zero when the method skips search.
    pub iterations: u64,
    pub top_k: usize,
    pub score: PlanScore,
    pub runtime: Duration,
}

/// All records of one experiment, in plan order.
#[derive(Debug, Clone, Default)]
pub struct ExperimentResults {
    records: Vec<RunRecord>,
}

impl ExperimentResults {
    /// An empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Records in plan order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any runs were recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregates records per instance and method, in first-seen order.
    pub fn summarize(&self) -> Vec<MethodSummary> {
        let mut summaries: Vec<MethodSummary> = Vec::new();
        for record in &self.records {
            let found = summaries
                .iter()
                .position(|s| s.instance == record.instance && s.method == record.method);
            let index = match found {
                Some(index) => index,
                None => {
                    summaries.push(MethodSummary::new(record.instance.clone(), record.method));
                    summaries.len() - 1
                }
            };
            summaries[index].absorb(record);
        }
        summaries
    }
}

/// Aggregates for one instance and method.
#[derive(Debug, Clone)]
pub struct MethodSummary {
    pub instance: String,
    pub method: Method,
    /// Runs absorbed into this summary.
    pub runs: u64,
    pub preference_sum: i64,
    pub cohesion_sum: i64,
    pub balance_sum: i64,
    /// Lexicographically best score seen; ties keep the earliest run.
    pub best_score: PlanScore,
    /// Seed of the best run.
    pub best_seed: u64,
    pub total_runtime: Duration,
}

impl MethodSummary {
    fn new(instance: String, method: Method) -> Self {
        MethodSummary {
            instance,
            method,
            runs: 0,
            preference_sum: 0,
            cohesion_sum: 0,
            balance_sum: 0,
            best_score: PlanScore::ZERO,
            best_seed: 0,
            total_runtime: Duration::ZERO,
        }
    }

    fn absorb(&mut self, record: &RunRecord) {
        if self.runs == 0 || record.score > self.best_score {
            self.best_score = record.score;
            self.best_seed = record.seed;
        }
        self.runs += 1;
        self.preference_sum += record.score.preference();
        self.cohesion_sum += record.score.cohesion();
        self.balance_sum += record.score.balance();
        self.total_runtime += record.runtime;
    }

    /// Mean preference hits per run.
    pub fn avg_preference(&self) -> f64 {
        self.preference_sum as f64 / self.runs as f64
    }

    /// Mean cohesion per run.
    pub fn avg_cohesion(&self) -> f64 {
        self.cohesion_sum as f64 / self.runs as f64
    }

    /// Mean balance per run.
    pub fn avg_balance(&self) -> f64 {
        self.balance_sum as f64 / self.runs as f64
    }

    /// The three criterion means, in lexicographic order.
    pub fn avg_criteria(&self) -> (f64, f64, f64) {
        (self.avg_preference(), self.avg_cohesion(), self.avg_balance())
    }

    /// Mean runtime per run.
    pub fn avg_runtime(&self) -> Duration {
        self.total_runtime / self.runs as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(instance: &str, method: Method, seed: u64, score: PlanScore) -> RunRecord {
        RunRecord {
            instance: instance.to_owned(),
            method,
            seed,
            iterations: 100,
            top_k: 3,
            score,
            runtime: Duration::from_millis(20),
        }
    }

    #[test]
    fn summarize_groups_by_instance_and_method() {
        let mut results = ExperimentResults::new();
        results.push(record("a", Method::Local, 1, PlanScore::of(4, 2, 0)));
        results.push(record("a", Method::NoLocal, 1, PlanScore::of(3, 1, 0)));
        results.push(record("a", Method::Local, 2, PlanScore::of(6, 2, -1)));
        results.push(record("b", Method::Local, 1, PlanScore::of(1, 0, 0)));

        let summaries = results.summarize();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].instance, "a");
        assert_eq!(summaries[0].method, Method::Local);
        assert_eq!(summaries[0].runs, 2);
        assert_eq!(summaries[1].method, Method::NoLocal);
        assert_eq!(summaries[2].instance, "b");
    }

    #[test]
    fn summary_means_and_best_are_computed_per_group() {
        let mut results = ExperimentResults::new();
        results.push(record("a", Method::Local, 1, PlanScore::of(4, 2, 0)));
        results.push(record("a", Method::Local, 2, PlanScore::of(6, 2, -1)));

        let summary = &results.summarize()[0];

        assert_eq!(summary.avg_preference(), 5.0);
        assert_eq!(summary.avg_cohesion(), 2.0);
        assert_eq!(summary.avg_balance(), -0.5);
        // (6, 2, -1) beats (4, 2, 0) on the first criterion.
        assert_eq!(summary.best_score, PlanScore::of(6, 2, -1));
        assert_eq!(summary.best_seed, 2);
        assert_eq!(summary.avg_runtime(), Duration::from_millis(20));
    }

    #[test]
    fn best_score_keeps_the_earliest_run_on_ties() {
        let mut results = ExperimentResults::new();
        results.push(record("a", Method::Local, 9, PlanScore::of(4, 2, 0)));
        results.push(record("a", Method::Local, 5, PlanScore::of(4, 2, 0)));

        let summary = &results.summarize()[0];

        assert_eq!(summary.best_seed, 9);
    }

    #[test]
    fn a_negative_best_score_survives_aggregation() {
        // The running best must track the first record even when it scores
        // below zero on some criterion.
        let mut results = ExperimentResults::new();
        results.push(record("a", Method::NoLocal, 3, PlanScore::of(0, 1, -4)));

        let summary = &results.summarize()[0];

        assert_eq!(summary.best_score, PlanScore::of(0, 1, -4));
        assert_eq!(summary.best_seed, 3);
    }
}
