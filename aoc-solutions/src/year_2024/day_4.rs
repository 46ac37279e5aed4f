//! Day 4: Ceres Search - word search in a character grid.

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, SolverPlugin};

const WORD: &[u8] = b"XMAS";

/// All 8 search directions as (row, col) steps.
const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct Solver;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 4,
        solver: &Solver,
        tags: &["2024", "grid"],
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Vec<&[u8]> = input.trim().lines().map(str::as_bytes).collect();
        if grid.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        if grid.iter().any(|row| row.len() != grid[0].len()) {
            return Err(ParseError::InvalidFormat(
                "grid rows have unequal lengths".to_string(),
            ));
        }
        Ok(grid)
    }
}

/// Check whether `WORD` starts at (row, col) and runs in direction (dr, dc).
fn word_at(grid: &[&[u8]], row: i64, col: i64, dr: i64, dc: i64) -> bool {
    WORD.iter().enumerate().all(|(i, &ch)| {
        let r = row + dr * i as i64;
        let c = col + dc * i as i64;
        (0..grid.len() as i64).contains(&r)
            && (0..grid[0].len() as i64).contains(&c)
            && grid[r as usize][c as usize] == ch
    })
}

impl PartSolver<1> for Solver {
    /// Count `XMAS` occurrences in all 8 directions from every cell.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = shared.as_slice();
        let mut count = 0usize;
        for row in 0..grid.len() {
            for col in 0..grid[0].len() {
                if grid[row][col] != WORD[0] {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    if word_at(grid, row as i64, col as i64, dr, dc) {
                        count += 1;
                    }
                }
            }
        }
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Count `A` cells whose two diagonals both read `MAS` or `SAM`.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = shared.as_slice();
        let mut count = 0usize;
        for row in 1..grid.len().saturating_sub(1) {
            for col in 1..grid[0].len().saturating_sub(1) {
                if grid[row][col] != b'A' {
                    continue;
                }
                let down = [grid[row - 1][col - 1], grid[row + 1][col + 1]];
                let up = [grid[row + 1][col - 1], grid[row - 1][col + 1]];
                let is_mas = |ends: [u8; 2]| ends == [b'M', b'S'] || ends == [b'S', b'M'];
                if is_mas(down) && is_mas(up) {
                    count += 1;
                }
            }
        }
        Ok(count.to_string())
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

    const SAMPLE: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

    #[test]
    fn part_1_all_directions() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "18");
    }

    #[test]
    fn part_2_crossed_mas() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "9");
    }

    #[test]
    fn word_found_backwards() {
        let mut shared = Solver::parse("SAMX").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
    }

    #[test]
    fn ragged_grid_rejected() {
        assert!(matches!(
            Solver::parse("ABC\nAB"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
