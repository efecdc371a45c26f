//! End-to-end solve pipeline.

use std::time::{Duration, Instant};

use tracing::info;

use deskplan_config::PlannerConfig;
use deskplan_core::{Assignment, Model, PlanScore};

use crate::construct::{construct, ConstructOptions};
use crate::improve::{improve, ImproveOptions, SearchStats};
use crate::scoring::score;

/// Everything one solve run produces.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub assignment: Assignment,
    /// Score right after construction.
    pub initial_score: PlanScore,
    /// Score after local search; equals `initial_score` when search is off.
    pub final_score: PlanScore,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Runs construction and, when enabled, local search.
pub fn solve(model: &Model, config: &PlannerConfig) -> SolveOutcome {
    let start = Instant::now();
    info!(
        event = "solve_start",
        employees = model.employee_count(),
        desks = model.desk_count(),
        days = model.day_count(),
        seed = config.seed,
    );

    let assignment = construct(
        model,
        &ConstructOptions {
            seed: config.seed,
            randomize: config.construction.randomize,
            top_k: config.construction.top_k,
        },
    );
    let initial_score = score(model, &assignment);
    info!(event = "construction_done", score = %initial_score);

    let (assignment, stats) = if config.local_search.enabled {
        let result = improve(
            model,
            &assignment,
            &ImproveOptions {
                seed: config.seed,
                iterations: config.local_search.iterations,
            },
        );
        (result.assignment, result.stats)
    } else {
        (assignment, SearchStats::default())
    };
    let final_score = score(model, &assignment);

    let elapsed = start.elapsed();
    info!(
        event = "solve_end",
        score = %final_score,
        accepted = stats.accepted,
        trials = stats.trials,
        elapsed_ms = elapsed.as_millis() as u64,
    );

    SolveOutcome {
        assignment,
        initial_score,
        final_score,
        stats,
        elapsed,
    }
}
