//! Result export and reporting.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::Method;
use crate::result::{ExperimentResults, MethodSummary};

/// CSV exporter for raw run records.
///
/// One row per run with the method label, seed, effective iterations, and
/// the three score criteria.
pub struct ExperimentCsv;

impl ExperimentCsv {
    /// Renders the records as CSV.
    pub fn to_string(results: &ExperimentResults) -> io::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "instance",
                "method",
                "seed",
                "iters",
                "top_k",
                "C1",
                "C2",
                "C3",
                "runtime_sec",
            ])
            .map_err(io::Error::other)?;
        for record in results.records() {
            writer
                .write_record([
                    record.instance.as_str(),
                    record.method.label(),
                    &record.seed.to_string(),
                    &record.iterations.to_string(),
                    &record.top_k.to_string(),
                    &record.score.preference().to_string(),
                    &record.score.cohesion().to_string(),
                    &record.score.balance().to_string(),
                    &format!("{:.4}", record.runtime.as_secs_f64()),
                ])
                .map_err(io::Error::other)?;
        }
        let bytes = writer.into_inner().map_err(io::Error::other)?;
        String::from_utf8(bytes).map_err(io::Error::other)
    }

    /// Writes the records to a CSV file.
    pub fn to_file(results: &ExperimentResults, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results)?)
    }
}

/// CSV exporter for per-method summaries.
pub struct SummaryCsv;

impl SummaryCsv {
    /// Renders the summaries as CSV.
    pub fn to_string(summaries: &[MethodSummary]) -> io::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "instance",
                "method",
                "runs",
                "avg_C1",
                "avg_C2",
                "avg_C3",
                "best_C1",
                "best_C2",
                "best_C3",
                "avg_runtime_sec",
                "best_seed",
            ])
            .map_err(io::Error::other)?;
        for summary in summaries {
            writer
                .write_record([
                    summary.instance.as_str(),
                    summary.method.label(),
                    &summary.runs.to_string(),
                    &format!("{:.2}", summary.avg_preference()),
                    &format!("{:.2}", summary.avg_cohesion()),
                    &format!("{:.2}", summary.avg_balance()),
                    &summary.best_score.preference().to_string(),
                    &summary.best_score.cohesion().to_string(),
                    &summary.best_score.balance().to_string(),
                    &format!("{:.4}", summary.avg_runtime().as_secs_f64()),
                    &summary.best_seed.to_string(),
                ])
                .map_err(io::Error::other)?;
        }
        let bytes = writer.into_inner().map_err(io::Error::other)?;
        String::from_utf8(bytes).map_err(io::Error::other)
    }

    /// Writes the summaries to a CSV file.
    pub fn to_file(summaries: &[MethodSummary], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(summaries)?)
    }
}

/// Markdown exporter for per-method summaries.
///
/// Renders a summary table plus, for every instance that ran both methods,
/// a one-line verdict comparing their averaged criteria lexicographically.
pub struct SummaryReport;

impl SummaryReport {
    /// Renders the summaries as Markdown.
    pub fn to_string(summaries: &[MethodSummary]) -> String {
        let mut output = String::new();

        writeln!(output, "# Experiment Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Instance | Method | Runs | Avg C1 | Avg C2 | Avg C3 | Best | Best seed | Avg runtime |"
        )
        .unwrap();
        writeln!(
            output,
            "|----------|--------|------|--------|--------|--------|------|-----------|-------------|"
        )
        .unwrap();
        for summary in summaries {
            writeln!(
                output,
                "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {} | {} | {:.4}s |",
                summary.instance,
                summary.method.label(),
                summary.runs,
                summary.avg_preference(),
                summary.avg_cohesion(),
                summary.avg_balance(),
                summary.best_score,
                summary.best_seed,
                summary.avg_runtime().as_secs_f64(),
            )
            .unwrap();
        }

        let mut instances: Vec<&str> = Vec::new();
        for summary in summaries {
            if !instances.contains(&summary.instance.as_str()) {
                instances.push(summary.instance.as_str());
            }
        }
        for instance in instances {
            let local = summaries
                .iter()
                .find(|s| s.instance == instance && s.method == Method::Local);
            let no_local = summaries
                .iter()
                .find(|s| s.instance == instance && s.method == Method::NoLocal);
            let (Some(local), Some(no_local)) = (local, no_local) else {
                continue;
            };
            writeln!(output).unwrap();
            match lex_cmp(local.avg_criteria(), no_local.avg_criteria()) {
                Ordering::Greater => writeln!(
                    output,
                    "On {instance} the lexicographic average favors **local**."
                )
                .unwrap(),
                Ordering::Less => writeln!(
                    output,
                    "On {instance} the lexicographic average favors **no_local**."
                )
                .unwrap(),
                Ordering::Equal => {
                    writeln!(output, "On {instance} the methods tie on average.").unwrap()
                }
            }
        }

        output
    }

    /// Writes the summaries to a Markdown file.
    pub fn to_file(summaries: &[MethodSummary], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(summaries))
    }
}

fn lex_cmp(a: (f64, f64, f64), b: (f64, f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0)
        .then(a.1.total_cmp(&b.1))
        .then(a.2.total_cmp(&b.2))
}
