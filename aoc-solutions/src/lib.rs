//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day is a module with a unit `Solver` struct implementing the
//! `aoc-runner` traits and an `inventory::submit!` plugin registration, so
//! linking this crate is enough to make its solvers visible to a registry.

pub mod year_2024;
