//! Deskplan Solver Engine
//!
//! This crate provides the planning pipeline:
//! - Lexicographic scoring of assignments (scoring module)
//! - Randomized greedy construction (construct module)
//! - Swap-based local search (improve module)
//! - The end-to-end solve entry point (solve module)
//!
//! Every random decision flows from a single seed, so runs are reproducible.

pub mod construct;
pub mod improve;
pub mod scoring;
pub mod solve;

pub use construct::{construct, ConstructOptions};
pub use improve::{improve, ImproveOptions, ImproveResult, SearchStats};
pub use scoring::{day_breakdowns, score, DayBreakdown};
pub use solve::{solve, SolveOutcome};
