//! Delimiter header parsing.
//!
//! An input may open with a header that declares custom delimiters:
//!
//! - `//;\n...` declares `;` (the whole header text is one delimiter)
//! - `//[***]\n...` declares `***`
//! - `//[*][%]\n...` declares `*` and `%`
//!
//! The header ends at the first newline. Custom delimiters are ordered before
//! the defaults (`,` and `\n`), which are always active.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, HeaderProblem, Result};
use crate::{DEFAULT_DELIMITERS, HEADER_PREFIX};

/// One or more non-`]` characters enclosed in brackets.
static BRACKET_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("bracket group pattern is valid"));

/// An ordered set of distinct delimiter strings.
///
/// Always ends with the default delimiters. Custom delimiters keep the order in
/// which the header declared them; repeats are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelimiterSet(Vec<String>);

impl Default for DelimiterSet {
    /// The set holding only `,` and `\n`.
    fn default() -> Self {
        Self::with_custom(std::iter::empty::<&str>())
    }
}

impl DelimiterSet {
    /// Builds a set from custom delimiters followed by the defaults.
    ///
    /// Empty strings are skipped since they cannot separate anything.
    pub fn with_custom<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut delimiters: Vec<String> = Vec::new();
        let all = custom
            .into_iter()
            .map(|d| d.as_ref().to_string())
            .chain(DEFAULT_DELIMITERS.iter().map(|d| d.to_string()));
        for delimiter in all {
            if !delimiter.is_empty() && !delimiters.contains(&delimiter) {
                delimiters.push(delimiter);
            }
        }
        Self(delimiters)
    }

    /// Returns `true` if no custom delimiter was declared.
    pub fn is_default(&self) -> bool {
        self.0.iter().map(String::as_str).eq(DEFAULT_DELIMITERS)
    }

    /// Delimiters in set order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Splits `input` into its delimiter set and the body that holds the numbers.
///
/// # Arguments
///
/// * `input` - The raw calculator input, with or without a header.
///
/// # Returns
///
/// The delimiter set and the body. Without a header the body is the whole
/// input and the set holds only the defaults.
///
/// # Errors
///
/// [`CalcError::MalformedHeader`] if the header has no terminating newline, or
/// if it starts with `[` but contains no complete `[...]` group.
pub fn extract(input: &str) -> Result<(DelimiterSet, &str)> {
    let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
        return Ok((DelimiterSet::default(), input));
    };

    let Some((header, body)) = rest.split_once('\n') else {
        return Err(CalcError::MalformedHeader {
            header: rest.to_string(),
            problem: HeaderProblem::MissingNewline,
        });
    };

    let set = DelimiterSet::with_custom(parse_header(header)?);
    log::trace!("header {:?} declares delimiters {:?}", header, set);
    Ok((set, body))
}

/// Returns the custom delimiters declared by `header` (the text between `//`
/// and the newline).
fn parse_header(header: &str) -> Result<Vec<&str>> {
    if !header.starts_with('[') {
        // Bare form: the whole header is a single delimiter.
        return Ok(vec![header]);
    }

    let groups: Vec<&str> = BRACKET_GROUP
        .captures_iter(header)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    if groups.is_empty() {
        return Err(CalcError::MalformedHeader {
            header: header.to_string(),
            problem: HeaderProblem::NoBracketGroups,
        });
    }
    Ok(groups)
}
