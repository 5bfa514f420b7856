//! # StrCalc
//!
//! Sums the integers encoded in a delimited text string.
//!
//! ## Overview
//!
//! Input is a list of integers separated by delimiters. Commas and newlines are
//! always recognized; an optional header declares additional ones:
//!
//! - `1,2\n3` uses only the default delimiters
//! - `//;\n1;2` declares the single delimiter `;`
//! - `//[***]\n1***2` declares a delimiter of any length
//! - `//[*][%]\n1*2%3` declares several delimiters at once
//!
//! Negative numbers are rejected (the error lists every one of them) and
//! numbers above [`MAX_VALUE`] are dropped from the sum.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  extract()   ┌──────────────┐  Tokenizer  ┌────────────┐
//! │   input    │ ───────────► │ DelimiterSet │ ──────────► │ Vec<i64>   │
//! │   &str     │              │   + body     │             │            │
//! └────────────┘              └──────────────┘             └─────┬──────┘
//!                                                                │ validate
//!                                                                ▼
//!                                                          Evaluation
//! ```
//!
//! - [`delimiters`] parses the optional header into a [`DelimiterSet`]
//! - [`tokenizer`] splits the body on literal delimiters and parses integers
//! - [`calculator`] rejects negatives, filters large values and sums the rest
//! - [`report`] holds the serializable [`Evaluation`] record
//!
//! Every operation is a pure function of its input. Nothing is cached between
//! calls apart from the compiled matcher for the default delimiters.
//!
//! ## Examples
//!
//! ```
//! assert_eq!(strcalc::add(Some("//[***][%%]\n1***2%%3")), Ok(6));
//! assert_eq!(strcalc::add(Some("2,1001")), Ok(2));
//! assert_eq!(strcalc::add(None), Ok(0));
//!
//! let err = strcalc::add(Some("1,-2,3,-4")).unwrap_err();
//! assert_eq!(err.to_string(), "negative numbers not allowed: -2, -4");
//! ```
//!
//! ### Inspecting an evaluation
//!
//! ```
//! use strcalc::Calculator;
//!
//! let evaluation = Calculator::new().evaluate(Some("//;\n5;2000;7"))?;
//! assert_eq!(evaluation.accepted, vec![5, 7]);
//! assert_eq!(evaluation.ignored, vec![2000]);
//! assert_eq!(evaluation.sum, 12);
//! # Ok::<(), strcalc::CalcError>(())
//! ```

/// The calculator facade.
pub mod calculator;
/// Delimiter header parsing.
pub mod delimiters;
/// Error types.
pub mod error;
/// Serializable evaluation record.
pub mod report;
/// Literal-delimiter tokenizer.
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use calculator::Calculator;
pub use delimiters::DelimiterSet;
pub use error::{CalcError, HeaderProblem, Result};
pub use report::Evaluation;

/// Delimiters that are always active, in the order they are appended.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// Largest value that still counts towards the sum.
pub const MAX_VALUE: i64 = 1000;

/// Marker that introduces a custom delimiter header.
pub const HEADER_PREFIX: &str = "//";

/// Sums the numbers in `input` using a default [`Calculator`].
///
/// Absent and empty input both sum to zero.
pub fn add(input: Option<&str>) -> Result<i64> {
    Calculator::new().add(input)
}
