//! Day 8: Resonant Collinearity - antinodes of same-frequency antenna pairs.

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 8,
        solver: &Solver,
        tags: &["2024", "grid"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    antennas: HashMap<u8, Vec<(i64, i64)>>,
    rows: i64,
    cols: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&[u8]> = input.trim().lines().map(str::as_bytes).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }

        let mut antennas: HashMap<u8, Vec<(i64, i64)>> = HashMap::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell != b'.' {
                    antennas
                        .entry(cell)
                        .or_default()
                        .push((row as i64, col as i64));
                }
            }
        }

        Ok(SharedData {
            antennas,
            rows: lines.len() as i64,
            cols: lines[0].len() as i64,
        })
    }
}

impl PartSolver<1> for Solver {
    /// Each same-frequency pair projects two antinodes, one beyond each
    /// antenna; count the distinct in-bounds ones.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let in_bounds =
            |(r, c): (i64, i64)| (0..shared.rows).contains(&r) && (0..shared.cols).contains(&c);

        let mut antinodes: HashSet<(i64, i64)> = HashSet::new();
        for positions in shared.antennas.values() {
            for (&a, &b) in positions.iter().tuple_combinations() {
                let delta = (a.0 - b.0, a.1 - b.1);
                for candidate in [(a.0 + delta.0, a.1 + delta.1), (b.0 - delta.0, b.1 - delta.1)] {
                    if in_bounds(candidate) {
                        antinodes.insert(candidate);
                    }
                }
            }
        }
        Ok(antinodes.len().to_string())
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

    const SAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

    #[test]
    fn part_1_distinct_antinodes() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "14");
    }

    #[test]
    fn different_frequencies_do_not_pair() {
        let mut shared = Solver::parse(".a.b.\n.....\n.....").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn out_of_bounds_antinodes_dropped() {
        // Pair at the left edge: one antinode lands outside.
        let mut shared = Solver::parse("aa....").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
    }
}
