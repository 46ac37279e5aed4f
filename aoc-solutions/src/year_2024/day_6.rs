//! Day 6: Guard Gallivant - trace the guard's patrol route.

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};
use std::collections::HashSet;

/// Directions in turn order: up, right, down, left. Hitting an obstacle
/// advances to the next entry (a 90-degree right turn).
const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Guard avatars, index-aligned with `DIRECTIONS`.
const AVATARS: [u8; 4] = [b'^', b'>', b'v', b'<'];

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 6,
        solver: &Solver,
        tags: &["2024", "grid"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    grid: Vec<Vec<u8>>,
    start: (i64, i64),
    facing: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Vec<Vec<u8>> = input
            .trim()
            .lines()
            .map(|line| line.as_bytes().to_vec())
            .collect();
        if grid.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }

        let (start, facing) = find_guard(&grid)
            .ok_or_else(|| ParseError::MissingData("no guard avatar in grid".to_string()))?;

        Ok(SharedData {
            grid,
            start,
            facing,
        })
    }
}

fn find_guard(grid: &[Vec<u8>]) -> Option<((i64, i64), usize)> {
    for (row, line) in grid.iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            if let Some(facing) = AVATARS.iter().position(|&a| a == cell) {
                return Some(((row as i64, col as i64), facing));
            }
        }
    }
    None
}

/// Walk from the start position until the guard steps off the grid,
/// returning every position visited.
fn walk(shared: &SharedData) -> HashSet<(i64, i64)> {
    let rows = shared.grid.len() as i64;
    let cols = shared.grid[0].len() as i64;
    let mut facing = shared.facing;
    let (mut row, mut col) = shared.start;
    let mut visited = HashSet::new();

    loop {
        visited.insert((row, col));
        let (dr, dc) = DIRECTIONS[facing];
        let (next_row, next_col) = (row + dr, col + dc);
        if !(0..rows).contains(&next_row) || !(0..cols).contains(&next_col) {
            return visited;
        }
        if shared.grid[next_row as usize][next_col as usize] == b'#' {
            facing = (facing + 1) % DIRECTIONS.len();
        } else {
            (row, col) = (next_row, next_col);
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(walk(shared).len().to_string())
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

    const SAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    #[test]
    fn part_1_distinct_positions() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "41");
    }

    #[test]
    fn guard_facing_edge_visits_straight_line() {
        let mut shared = Solver::parse("...\n.^.\n...").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn missing_guard_is_a_parse_error() {
        assert!(matches!(
            Solver::parse("....\n.#.."),
            Err(ParseError::MissingData(_))
        ));
    }
}
