//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as {year}/day{NN}.txt
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
