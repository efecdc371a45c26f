//! Deskplan command line interface.

mod experiment;
mod export;
mod report;
mod solve;
mod validate;

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Subcommands report their exit code; hard failures bubble up as errors.
type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "deskplan", version, about = "Desk assignment planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a desk assignment instance
    Solve(solve::SolveArgs),
    /// Compare solver variants across instances and seeds
    Experiment(experiment::ExperimentArgs),
    /// Validate a solution document against its instance
    Validate(validate::ValidateArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deskplan=info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Solve(args) => solve::run(args),
        Commands::Experiment(args) => experiment::run(args),
        Commands::Validate(args) => validate::run(args),
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// File stem used to label an instance in outputs.
fn instance_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "instance".to_owned())
}
