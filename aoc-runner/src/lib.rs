//! Advent of Code solver framework
//!
//! A trait-based framework for defining, registering, and running Advent of
//! Code solvers across years and days.
//!
//! # Overview
//!
//! - [`AocParser`] separates input parsing from solving; its `SharedData`
//!   type carries parsed input (and any intermediate results shared between
//!   parts).
//! - [`PartSolver`] implements one part; [`Solver`] dispatches part numbers.
//! - [`SolverInstance`] pairs shared data with parse timing; [`DynSolver`]
//!   is its type-erased interface.
//! - [`SolverPlugin`] entries submitted via `inventory::submit!` let solution
//!   crates self-register; [`RegistryBuilder`] collects them into an
//!   immutable [`SolverRegistry`].
//!
//! # Quick example
//!
//! ```
//! use aoc_runner::{
//!     AocParser, ParseError, PartSolver, RegisterableSolver, RegistryBuilder, SolveError, Solver,
//! };
//!
//! struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             _ => Err(SolveError::PartOutOfRange(part)),
//!         }
//!     }
//! }
//!
//! let builder = MyDay1.register_with(RegistryBuilder::new(), 2024, 1).unwrap();
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory so solution crates can `submit!` plugins without
// depending on it directly
pub use inventory;
