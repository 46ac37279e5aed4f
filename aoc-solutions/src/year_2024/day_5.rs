//! Day 5: Print Queue - validate page updates against ordering rules.

use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use std::collections::HashMap;

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 5,
        solver: &Solver,
        tags: &["2024"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    rules: Vec<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rule_block, update_block) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line between rules and updates".to_string()))?;

        let rules = rule_block
            .lines()
            .map(parse_rule)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("rule: {}", e)))?;

        let updates = update_block
            .lines()
            .map(parse_update)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("update: {}", e)))?;

        Ok(SharedData { rules, updates })
    }
}

fn parse_rule(line: &str) -> Result<(u32, u32), anyhow::Error> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' in {:?}", line))?;
    Ok((
        before.parse().context("page before '|'")?,
        after.parse().context("page after '|'")?,
    ))
}

fn parse_update(line: &str) -> Result<Vec<u32>, anyhow::Error> {
    line.split(',')
        .map(|page| page.parse().with_context(|| format!("page in {:?}", line)))
        .collect()
}

/// An update is ordered when every rule whose two pages both appear in the
/// update lists them in rule order. Rules mentioning absent pages are ignored.
fn ordered(update: &[u32], rules: &[(u32, u32)]) -> bool {
    let positions: HashMap<u32, usize> = update
        .iter()
        .enumerate()
        .map(|(i, &page)| (page, i))
        .collect();
    rules.iter().all(|(before, after)| {
        match (positions.get(before), positions.get(after)) {
            (Some(b), Some(a)) => b < a,
            _ => true,
        }
    })
}

impl PartSolver<1> for Solver {
    /// Sum of middle pages over the already-ordered updates.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|update| ordered(update, &shared.rules))
            .map(|update| update[update.len() / 2])
            .sum();
        Ok(total.to_string())
    }
}

impl aoc_runner::Solver for Solver {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

    #[test]
    fn part_1_middle_page_sum() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "143");
    }

    #[test]
    fn rules_for_absent_pages_ignored() {
        let shared = Solver::parse("1|2\n9|1\n\n1,2,3").unwrap();
        assert!(ordered(&shared.updates[0], &shared.rules));
    }

    #[test]
    fn out_of_order_update_detected() {
        let shared = Solver::parse("1|2\n\n2,1").unwrap();
        assert!(!ordered(&shared.updates[0], &shared.rules));
    }
}
