//! Day 3: Mull It Over - scan corrupted memory for `mul(a,b)` instructions.
//!
//! The scanning itself lives in `aoc-scan`; this solver just applies the
//! day's fixed tokens. Part 2 strips `don't()`..`do()` regions before the
//! scan.

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use aoc_scan::{exclude_regions, scan};

const START_TOKEN: &str = "mul(";
const DISABLE_TOKEN: &str = "don't()";
const ENABLE_TOKEN: &str = "do()";

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 3,
        solver: &Solver,
        tags: &["2024"],
    }
}

impl AocParser for Solver {
    // The scanner works on the raw text; no transformation up front.
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = scan(shared, START_TOKEN).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let enabled = exclude_regions(shared, DISABLE_TOKEN, ENABLE_TOKEN)
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        let total =
            scan(&enabled, START_TOKEN).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        Ok(total.to_string())
    }
}

impl aoc_runner::Solver for Solver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_1: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SAMPLE_2: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn part_1_sums_all_valid_instructions() {
        let mut shared = Solver::parse(SAMPLE_1).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "161");
    }

    #[test]
    fn part_2_ignores_disabled_regions() {
        let mut shared = Solver::parse(SAMPLE_2).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "48");
    }

    #[test]
    fn part_1_counts_disabled_regions_too() {
        let mut shared = Solver::parse(SAMPLE_2).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "161");
    }
}
