//! Day 2: Red-Nosed Reports - reactor level safety checks.

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use itertools::Itertools;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 2,
        solver: &Solver,
        tags: &["2024"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Vec<i64>>,
    counts: Option<SafetyCounts>,
}

/// Both parts come from one pass over the reports: part 2 re-examines only
/// the reports that failed the plain check.
#[derive(Debug)]
struct SafetyCounts {
    safe: usize,
    dampened_safe: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let reports = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i64>, _>>()
                    .map_err(|e| {
                        ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            reports,
            counts: None,
        })
    }
}

/// A report is safe when successive changes all share one sign and each has
/// magnitude 1..=3.
fn safe(levels: &[i64]) -> bool {
    let changes: Vec<i64> = levels.iter().tuple_windows().map(|(a, b)| b - a).collect();
    let in_range = changes.iter().all(|c| (1..=3).contains(&c.abs()));
    let all_increasing = changes.iter().all(|c| *c > 0);
    let all_decreasing = changes.iter().all(|c| *c < 0);
    in_range && (all_increasing || all_decreasing)
}

/// Problem dampener: safe if removing any single level makes the report safe.
fn dampened_safe(levels: &[i64]) -> bool {
    (0..levels.len()).any(|skip| {
        let remaining: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, v)| *v)
            .collect();
        safe(&remaining)
    })
}

fn count_for_both(shared: &mut SharedData) -> &SafetyCounts {
    shared.counts.get_or_insert_with(|| {
        let mut counts = SafetyCounts {
            safe: 0,
            dampened_safe: 0,
        };
        for report in &shared.reports {
            if safe(report) {
                counts.safe += 1;
            } else if dampened_safe(report) {
                counts.dampened_safe += 1;
            }
        }
        counts
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_for_both(shared).safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = count_for_both(shared);
        Ok((counts.safe + counts.dampened_safe).to_string())
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

    const SAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";

    #[test]
    fn part_1_safe_reports() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn part_2_dampened_reports() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "4");
    }

    #[test]
    fn direction_change_is_unsafe() {
        assert!(!safe(&[1, 3, 2, 4, 5]));
        assert!(dampened_safe(&[1, 3, 2, 4, 5]));
    }

    #[test]
    fn flat_step_is_unsafe() {
        assert!(!safe(&[8, 6, 4, 4, 1]));
        assert!(dampened_safe(&[8, 6, 4, 4, 1]));
    }

    #[test]
    fn large_step_cannot_be_dampened() {
        assert!(!safe(&[1, 2, 7, 8, 9]));
        assert!(!dampened_safe(&[1, 2, 7, 8, 9]));
    }
}
