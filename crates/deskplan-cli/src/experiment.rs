//! The `experiment` subcommand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use owo_colors::OwoColorize;

use deskplan_benchmark::{
    parse_methods, ExperimentCsv, ExperimentPlan, ExperimentRunner, SeedSpec, SummaryCsv,
    SummaryReport,
};
use deskplan_core::{Instance, Model};

use crate::{instance_stem, CliResult};

#[derive(Args)]
pub struct ExperimentArgs {
    /// Instance files (JSON)
    #[arg(required = true)]
    pub instances: Vec<PathBuf>,

    /// Methods to compare: local, no_local, or both
    #[arg(long, default_value = "both")]
    pub methods: String,

    /// Comma-separated seed list (overrides --num-seeds and --seed-start)
    #[arg(long)]
    pub seeds: Option<String>,

    /// Number of consecutive seeds to run
    #[arg(long, default_value_t = 5)]
    pub num_seeds: u64,

    /// First seed of the consecutive range
    #[arg(long, default_value_t = 1)]
    pub seed_start: u64,

    /// Local search iterations for the local method
    #[arg(long, default_value_t = 1000)]
    pub iters: u64,

    /// Construction candidate window
    #[arg(long, default_value_t = 3)]
    pub top_k: usize,

    /// Path of the per-run CSV
    #[arg(long, default_value = "results/experiments.csv")]
    pub out: PathBuf,

    /// Path of the summary CSV (defaults to summary.csv next to --out)
    #[arg(long)]
    pub summary_csv: Option<PathBuf>,

    /// Path of the Markdown summary (defaults to summary.md next to --out)
    #[arg(long)]
    pub summary_md: Option<PathBuf>,
}

pub fn run(args: ExperimentArgs) -> CliResult {
    let methods = parse_methods(&args.methods)?;
    let seeds = match &args.seeds {
        Some(list) => SeedSpec::List(parse_seed_list(list)?),
        None => SeedSpec::Range {
            start: args.seed_start,
            count: args.num_seeds,
        },
    };
    let plan = ExperimentPlan::new()
        .with_methods(methods)
        .with_seeds(seeds)
        .with_iterations(args.iters)
        .with_top_k(args.top_k);

    let mut instances = Vec::with_capacity(args.instances.len());
    for path in &args.instances {
        let instance = Instance::load(path)?;
        instances.push((instance_stem(path), Model::build(&instance)));
    }

    println!(
        "{} running {} jobs over {} instance(s)",
        "·".bright_black(),
        plan.runs_per_instance() * instances.len(),
        instances.len()
    );
    let results = ExperimentRunner::new(plan).run(&instances);
    let summaries = results.summarize();

    ensure_parent(&args.out)?;
    ExperimentCsv::to_file(&results, &args.out)?;
    println!("{} wrote {}", "✓".green(), args.out.display());

    let summary_csv = args
        .summary_csv
        .clone()
        .unwrap_or_else(|| sibling(&args.out, "summary.csv"));
    ensure_parent(&summary_csv)?;
    SummaryCsv::to_file(&summaries, &summary_csv)?;
    println!("{} wrote {}", "✓".green(), summary_csv.display());

    let summary_md = args
        .summary_md
        .clone()
        .unwrap_or_else(|| sibling(&args.out, "summary.md"));
    ensure_parent(&summary_md)?;
    SummaryReport::to_file(&summaries, &summary_md)?;
    println!("{} wrote {}", "✓".green(), summary_md.display());

    for summary in &summaries {
        println!(
            "{} {} avg ({:.2}, {:.2}, {:.2}) best {} (seed {})",
            summary.instance,
            summary.method.label(),
            summary.avg_preference(),
            summary.avg_cohesion(),
            summary.avg_balance(),
            summary.best_score.bright_cyan(),
            summary.best_seed
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_seed_list(text: &str) -> Result<Vec<u64>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| format!("invalid seed '{part}'"))
        })
        .collect()
}

/// A path next to `out` with the given file name.
fn sibling(out: &Path, name: &str) -> PathBuf {
    match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
