//! The `solve` subcommand.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use owo_colors::OwoColorize;

use deskplan_config::PlannerConfig;
use deskplan_core::{validate, Instance, Model, SolutionDocument};
use deskplan_solver::solve;

use crate::report::print_day_report;
use crate::{export, instance_stem, CliResult};

#[derive(Args)]
pub struct SolveArgs {
    /// Instance file (JSON)
    pub instance: PathBuf,

    /// Directory for the solution document
    #[arg(long, default_value = "solutions")]
    pub outdir: PathBuf,

    /// Configuration file (TOML or YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed (overrides the configuration file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Construction candidate window (overrides the configuration file)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Local search iterations (overrides the configuration file)
    #[arg(long)]
    pub iters: Option<u64>,

    /// Skip local search
    #[arg(long)]
    pub no_local_search: bool,

    /// Print the solution to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Print a per-day score report
    #[arg(long)]
    pub report: bool,

    /// Check the solution for structural violations before writing it
    #[arg(long)]
    pub validate: bool,

    /// Write CSV exports of the solved plan
    #[arg(long)]
    pub export_csv: bool,

    /// Directory for CSV exports (default: <outdir>/csv_export)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

pub fn run(args: SolveArgs) -> CliResult {
    let instance = Instance::load(&args.instance)?;
    let model = Model::build(&instance);

    let mut config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::new(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(top_k) = args.top_k {
        config = config.with_top_k(top_k);
    }
    if let Some(iters) = args.iters {
        config = config.with_iterations(iters);
    }
    if args.no_local_search {
        config = config.with_local_search(false);
    }

    let outcome = solve(&model, &config);
    println!(
        "{} construction {}",
        "·".bright_black(),
        outcome.initial_score.bright_cyan()
    );
    println!(
        "{} final        {}  ({} of {} swaps kept, {:.3}s)",
        "·".bright_black(),
        outcome.final_score.bright_cyan(),
        outcome.stats.accepted,
        outcome.stats.trials,
        outcome.elapsed.as_secs_f64()
    );

    if args.report {
        print_day_report(&model, &outcome.assignment);
    }

    let document = SolutionDocument::from_assignment(&model, &outcome.assignment);

    if args.validate {
        let violations = validate(&model, &document);
        if violations.is_empty() {
            println!("{} solution is structurally valid", "✓".green());
        } else {
            for violation in &violations {
                eprintln!("{} {violation}", "⚠".yellow());
            }
            return Ok(ExitCode::from(2));
        }
    }

    let stem = instance_stem(&args.instance);
    if args.stdout {
        println!("{}", document.to_json_pretty()?);
    } else {
        fs::create_dir_all(&args.outdir)?;
        let path = args.outdir.join(format!("solution_{stem}.json"));
        document.save(&path)?;
        println!("{} wrote {}", "✓".green(), path.display());
    }

    if args.export_csv {
        let export_dir = args
            .export_dir
            .unwrap_or_else(|| args.outdir.join("csv_export"));
        fs::create_dir_all(&export_dir)?;
        export::write_csv_exports(&model, &outcome.assignment, &export_dir)?;
        println!(
            "{} wrote CSV exports to {}",
            "✓".green(),
            export_dir.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
