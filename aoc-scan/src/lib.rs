//! Micro-parser for fixed-grammar instructions embedded in noisy text.
//!
//! Two independent components, usable separately or chained:
//!
//! - [`scan`] walks a text buffer looking for a start token (e.g. `"mul("`)
//!   and runs a small state machine over the characters that follow it,
//!   summing `left * right` for every occurrence that completes the grammar
//!   `TOKEN <1-3 digits> , <1-3 digits> )` with nothing in between.
//! - [`exclude_regions`] removes every span from a disable token through the
//!   next enable token (both inclusive) before such a scan.
//!
//! Malformed instruction attempts are not errors: they are skipped and
//! scanning resumes at the next token occurrence. The only fallible
//! precondition is an empty token, reported as [`TokenError`].
//!
//! # Example
//!
//! ```
//! use aoc_scan::{exclude_regions, scan};
//!
//! let text = "xmul(2,4)%&mul[3,7]!don't()mul(5,5)do()mul(8,5)";
//! assert_eq!(scan(text, "mul(").unwrap(), 2 * 4 + 5 * 5 + 8 * 5);
//!
//! let enabled = exclude_regions(text, "don't()", "do()").unwrap();
//! assert_eq!(scan(&enabled, "mul(").unwrap(), 2 * 4 + 8 * 5);
//! ```

mod exclude;
mod scanner;

pub use exclude::exclude_regions;
pub use scanner::scan;

use thiserror::Error;

/// Error type for invalid token preconditions.
///
/// Matching an empty token is undefined for both components, so it is the
/// one condition surfaced as an error rather than handled by skipping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A marker token was empty.
    #[error("{0} token must not be empty")]
    Empty(&'static str),
}
