use once_cell::sync::Lazy;
use regex::Regex;

use crate::delimiters::DelimiterSet;
use crate::error::{CalcError, Result};

static DEFAULT_TOKENIZER: Lazy<Tokenizer> = Lazy::new(|| {
    Tokenizer::new(&DelimiterSet::default()).expect("default delimiters compile")
});

/// Splits a body on any delimiter of a [`DelimiterSet`].
///
/// Delimiters are matched as literal text. Longer delimiters are tried first,
/// so with `*` and `**` both declared, `1**2` splits once rather than twice.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compiles a matcher for `delimiters`.
    pub fn new(delimiters: &DelimiterSet) -> Result<Self> {
        let mut literals: Vec<&str> = delimiters.iter().collect();
        // Stable: equal-length delimiters keep their declared order.
        literals.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = literals
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            pattern: Regex::new(&alternation)?,
        })
    }

    /// Shared tokenizer for the `,` and `\n` defaults.
    pub fn default_ref() -> &'static Tokenizer {
        &DEFAULT_TOKENIZER
    }

    /// Yields the non-empty tokens of `body`.
    ///
    /// Adjacent, leading and trailing delimiters produce empty tokens, which
    /// are skipped.
    pub fn tokens<'b>(&self, body: &'b str) -> impl Iterator<Item = &'b str> {
        self.pattern.split(body).filter(|token| !token.is_empty())
    }

    /// Parses every token of `body` as an integer, in order.
    pub fn numbers(&self, body: &str) -> Result<Vec<i64>> {
        self.tokens(body).map(parse_token).collect()
    }
}

/// Parses `token` with surrounding whitespace (including a stray `\r`)
/// ignored. A blank token still fails.
fn parse_token(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|source| CalcError::MalformedNumber {
            token: token.to_string(),
            source,
        })
}
