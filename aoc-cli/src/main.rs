//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_runner::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use error::CliError;
use executor::Executor;
use input::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;
    let inputs = InputStore::new(args.input_dir.clone());
    let quiet = args.quiet;

    let executor = Executor::new(registry, inputs, &args);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs are reported up front but do not stop the run; the
    // affected parts produce error results.
    let missing_inputs = executor.missing_inputs(&work_items);
    if !missing_inputs.is_empty() && !quiet {
        println!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            println!("  - {}/day{:02}", year, day);
        }
    }

    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();
    for work in &work_items {
        for result in executor.run(work) {
            formatter.print_result(&result);
            results.push(result);
        }
    }

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
