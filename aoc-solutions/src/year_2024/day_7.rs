//! Day 7: Bridge Repair - calibration equations evaluated left to right.

use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 7,
        solver: &Solver,
        tags: &["2024"],
    }
}

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_equation(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

fn parse_equation(line: &str) -> Result<Equation, anyhow::Error> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in {:?}", line))?;
    let target = target.parse().context("target value")?;
    let operands = operands
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()
        .context("operand")?;
    if operands.is_empty() {
        return Err(anyhow!("no operands"));
    }
    Ok(Equation { target, operands })
}

/// Operators allowed when testing an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operators {
    AddMul,
    AddMulConcat,
}

/// Can the remaining operands reach `target`, starting from `acc`?
/// Operators apply strictly left to right.
fn reachable(target: u64, acc: u64, rest: &[u64], ops: Operators) -> bool {
    let Some((&next, rest)) = rest.split_first() else {
        return acc == target;
    };
    reachable(target, acc + next, rest, ops)
        || reachable(target, acc * next, rest, ops)
        || (ops == Operators::AddMulConcat && reachable(target, concat(acc, next), rest, ops))
}

/// Digit concatenation: `concat(12, 345)` is `12345`.
fn concat(left: u64, right: u64) -> u64 {
    let mut shift = 10u64;
    while shift <= right {
        shift *= 10;
    }
    left * shift + right
}

fn calibration_total(equations: &[Equation], ops: Operators) -> u64 {
    equations
        .iter()
        .filter(|eq| reachable(eq.target, eq.operands[0], &eq.operands[1..], ops))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration_total(shared, Operators::AddMul).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration_total(shared, Operators::AddMulConcat).to_string())
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

    const SAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

    #[test]
    fn part_1_add_and_mul() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "3749"
        );
    }

    #[test]
    fn part_2_with_concatenation() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "11387"
        );
    }

    #[test]
    fn concat_digit_counts() {
        assert_eq!(concat(12, 345), 12345);
        assert_eq!(concat(1, 0), 10);
        assert_eq!(concat(15, 6), 156);
    }

    #[test]
    fn single_operand_must_equal_target() {
        let mut shared = Solver::parse("5: 5\n6: 5").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5");
    }
}
