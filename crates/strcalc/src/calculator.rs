use std::borrow::Cow;

use crate::MAX_VALUE;
use crate::delimiters::{self, DelimiterSet};
use crate::error::{CalcError, Result};
use crate::report::Evaluation;
use crate::tokenizer::Tokenizer;

/// A string-to-sum calculator.
///
/// `Calculator` holds no state; every call is independent, and one value may
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Creates a new `Calculator`.
    pub const fn new() -> Self {
        Self
    }

    /// Sums the numbers in `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - Delimited numbers, optionally preceded by a `//` header.
    ///   `None` and `""` both sum to zero.
    ///
    /// # Returns
    ///
    /// The sum of every number not above [`MAX_VALUE`].
    ///
    /// # Errors
    ///
    /// - [`CalcError::NegativeNumbers`] listing every negative number found
    /// - [`CalcError::MalformedHeader`] for an unparseable `//` header
    /// - [`CalcError::MalformedNumber`] for a token that is not an integer
    pub fn add(&self, input: Option<&str>) -> Result<i64> {
        self.evaluate(input).map(|evaluation| evaluation.sum)
    }

    /// Runs the same pipeline as [`add`](Self::add) and returns the full
    /// [`Evaluation`], including the numbers left out of the sum.
    pub fn evaluate(&self, input: Option<&str>) -> Result<Evaluation> {
        let Some(input) = input.filter(|text| !text.is_empty()) else {
            return Ok(Evaluation::empty());
        };

        let (delimiters, body) = delimiters::extract(input)?;
        let numbers = tokenize(&delimiters, body)?;

        let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
        if !negatives.is_empty() {
            return Err(CalcError::NegativeNumbers { numbers: negatives });
        }

        let (accepted, ignored): (Vec<i64>, Vec<i64>) =
            numbers.into_iter().partition(|n| *n <= MAX_VALUE);
        if !ignored.is_empty() {
            log::debug!(
                "ignoring {} number(s) above {}: {:?}",
                ignored.len(),
                MAX_VALUE,
                ignored
            );
        }

        let sum = checked_sum(&accepted)?;
        Ok(Evaluation {
            delimiters,
            accepted,
            ignored,
            sum,
        })
    }

    /// Extracts and parses every number in `input` without validating or
    /// filtering them.
    pub fn parse_numbers(&self, input: &str) -> Result<Vec<i64>> {
        let (delimiters, body) = delimiters::extract(input)?;
        tokenize(&delimiters, body)
    }
}

fn tokenize(delimiters: &DelimiterSet, body: &str) -> Result<Vec<i64>> {
    let tokenizer = if delimiters.is_default() {
        Cow::Borrowed(Tokenizer::default_ref())
    } else {
        Cow::Owned(Tokenizer::new(delimiters)?)
    };
    tokenizer.numbers(body)
}

fn checked_sum(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(CalcError::Overflow)
}
