//! Timed solver instances and the type-erased solver interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver instance for a specific year-day problem.
///
/// Holds the shared data (parsed input and intermediate results) together
/// with parse timing.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input, recording parse timing.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch.
///
/// The registry hands out `Box<dyn DynSolver>` so callers can run solvers of
/// different concrete types uniformly.
pub trait DynSolver {
    /// Solve the specified part with timing.
    ///
    /// Part numbers outside `1..=parts()` fail with
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the year for this solver
    fn year(&self) -> u16;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
