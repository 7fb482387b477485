// crates/splice_markers/src/error.rs

use std::fmt;
use thiserror::Error;

/// Which of the two bounding markers an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::Start => f.write_str("start marker"),
            MarkerRole::End => f.write_str("end marker"),
        }
    }
}

/// Failures that leave the target document untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpliceError {
    #[error("markers not found: {role} `{marker}` is absent from the document")]
    MarkerNotFound { role: MarkerRole, marker: String },

    #[error("{role} must not be empty")]
    EmptyMarker { role: MarkerRole },

    #[error("invalid span {start}..{end} for a document of {len} bytes")]
    InvalidSpan { start: usize, end: usize, len: usize },
}
