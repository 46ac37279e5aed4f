//! Sequential executor for running solvers
//!
//! Each work item is one registered year/day with the parts to run. Items
//! run strictly in order: input is read, the solver parses it once, then
//! each part runs against the shared data.

use crate::cli::Args;
use crate::input::InputStore;
use aoc_runner::{ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse duration, shared by all parts of a day; absent on failures
    /// before parsing completed.
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Sequential executor over registered solvers
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from parsed arguments
    pub fn new(registry: SolverRegistry, inputs: InputStore, args: &Args) -> Self {
        Self {
            registry,
            inputs,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on part_filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Check which work items have no input file
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Run one work item, producing a result per part.
    ///
    /// Input or parse failures produce an error result for every requested
    /// part rather than aborting the run.
    pub fn run(&self, work: &WorkItem) -> Vec<SolverResult> {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.load(year, day) {
            Ok(input) => input,
            Err(e) => {
                return error_results(work, &e.to_string());
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                return error_results(work, &e.to_string());
            }
        };

        work.parts
            .clone()
            .map(|part| {
                let answer = solver.solve(part);
                SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: answer
                        .as_ref()
                        .map(|r| r.duration())
                        .unwrap_or_else(|_| TimeDelta::zero()),
                    answer: answer.map(|r| r.answer).map_err(Into::into),
                    parse_duration: Some(solver.parse_duration()),
                }
            })
            .collect()
    }
}

/// One error result per requested part
fn error_results(work: &WorkItem, message: &str) -> Vec<SolverResult> {
    work.parts
        .clone()
        .map(|part| SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(SolverError::ParseError(ParseError::InvalidFormat(
                message.to_string(),
            ))),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        })
        .collect()
}
