use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised while evaluating an input string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// One or more numbers were negative. Holds all of them in input order.
    #[error("negative numbers not allowed: {}", join_numbers(.numbers))]
    NegativeNumbers { numbers: Vec<i64> },

    /// The `//` header could not be parsed. `header` is the text after `//`.
    #[error("malformed delimiter header {header:?}: {problem}")]
    MalformedHeader {
        header: String,
        problem: HeaderProblem,
    },

    /// A token left after splitting is not an integer.
    #[error("invalid number {token:?}")]
    MalformedNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("sum overflows a 64-bit integer")]
    Overflow,

    #[error("failed to build delimiter matcher: {0}")]
    Matcher(#[from] regex::Error),
}

/// Reason a delimiter header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProblem {
    /// The header runs to the end of input without a newline.
    MissingNewline,
    /// The header starts with `[` but holds no non-empty `[...]` group.
    NoBracketGroups,
}

impl fmt::Display for HeaderProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderProblem::MissingNewline => f.write_str("header is not terminated by a newline"),
            HeaderProblem::NoBracketGroups => f.write_str("no bracketed delimiter found"),
        }
    }
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
