use serde::{Deserialize, Serialize};

use crate::delimiters::DelimiterSet;

/// Record of one successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Delimiters in effect, custom ones first.
    pub delimiters: DelimiterSet,
    /// Numbers that counted towards the sum, in input order.
    pub accepted: Vec<i64>,
    /// Numbers above [`MAX_VALUE`](crate::MAX_VALUE), in input order.
    pub ignored: Vec<i64>,
    pub sum: i64,
}

impl Evaluation {
    /// The evaluation of absent or empty input.
    pub fn empty() -> Self {
        Self {
            delimiters: DelimiterSet::default(),
            accepted: Vec::new(),
            ignored: Vec::new(),
            sum: 0,
        }
    }
}
