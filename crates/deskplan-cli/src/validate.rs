//! The `validate` subcommand.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use owo_colors::OwoColorize;

use deskplan_core::{validate, Instance, Model, SolutionDocument};

use crate::CliResult;

#[derive(Args)]
pub struct ValidateArgs {
    /// Instance file (JSON)
    pub instance: PathBuf,

    /// Solution document to check
    pub solution: PathBuf,
}

pub fn run(args: ValidateArgs) -> CliResult {
    let instance = Instance::load(&args.instance)?;
    let model = Model::build(&instance);
    let document = SolutionDocument::load(&args.solution)?;

    let violations = validate(&model, &document);
    if violations.is_empty() {
        println!("{} solution is structurally valid", "✓".green());
        Ok(ExitCode::SUCCESS)
    } else {
        for violation in &violations {
            eprintln!("{} {violation}", "⚠".yellow());
        }
        eprintln!("{} violation(s) found", violations.len());
        Ok(ExitCode::from(2))
    }
}
