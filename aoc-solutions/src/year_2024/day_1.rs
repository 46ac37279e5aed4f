//! Day 1: Historian Hysteria - pair up two location lists.

use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use itertools::Itertools;
use std::collections::HashMap;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 1,
        solver: &Solver,
        tags: &["2024"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (line_idx, line) in input.trim().lines().enumerate() {
            parse_pair(line)
                .map(|(l, r)| {
                    left.push(l);
                    right.push(r);
                })
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
        }

        Ok(SharedData { left, right })
    }
}

fn parse_pair(line: &str) -> Result<(i64, i64), anyhow::Error> {
    let mut fields = line.split_whitespace();
    let left = fields
        .next()
        .ok_or_else(|| anyhow!("empty line"))?
        .parse()
        .context("left value")?;
    let right = fields
        .next()
        .ok_or_else(|| anyhow!("missing right value"))?
        .parse()
        .context("right value")?;
    if fields.next().is_some() {
        return Err(anyhow!("expected exactly two values"));
    }
    Ok((left, right))
}

impl PartSolver<1> for Solver {
    /// Total distance: sum of pairwise differences between the sorted lists.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: i64 = shared
            .left
            .iter()
            .sorted_unstable()
            .zip(shared.right.iter().sorted_unstable())
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Similarity score: each left value times its frequency in the right list.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut freq: HashMap<i64, i64> = HashMap::new();
        for &value in &shared.right {
            *freq.entry(value).or_default() += 1;
        }

        let similarity: i64 = shared
            .left
            .iter()
            .map(|value| value * freq.get(value).copied().unwrap_or_default())
            .sum();
        Ok(similarity.to_string())
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

    const SAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    #[test]
    fn part_1_total_distance() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "11");
    }

    #[test]
    fn part_2_similarity_score() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "31");
    }

    #[test]
    fn malformed_line_reports_position() {
        let err = Solver::parse("1 2\n3 oops\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
