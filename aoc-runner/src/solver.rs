//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data.
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing separate from solving.
///
/// # Example
///
/// ```
/// use aoc_runner::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), giving compile-time
/// evidence that the part exists.
///
/// # Example
///
/// ```
/// use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait dispatching part numbers to the `PartSolver` implementations.
///
/// # Example
///
/// ```
/// use aoc_runner::{AocParser, ParseError, PartSolver, SolveError, Solver};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().product::<i32>().to_string())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => <Self as PartSolver<1>>::solve(shared),
///             2 => <Self as PartSolver<2>>::solve(shared),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch on top of [`Solver`].
pub trait SolverExt: Solver {
    /// Solve `part` after validating it against `1..=PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
