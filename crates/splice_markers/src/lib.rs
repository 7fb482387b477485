// crates/splice_markers/src/lib.rs

//! Replaces the text between two literal markers in a document.
//!
//! The start marker's first occurrence opens the span; the end marker's
//! first occurrence after it closes the span. The start marker is consumed
//! by the splice, the end marker is kept:
//!
//! ```
//! use splice_markers::splice_markers;
//!
//! let out = splice_markers("AAA<<START>>body<<END>>ZZZ", "<<START>>", "<<END>>", "<<START>>NEW").unwrap();
//! assert_eq!(out, "AAA<<START>>NEW<<END>>ZZZ");
//! ```
//!
//! File-level splicing, with an atomic write-back, goes through
//! [`processor::DefaultFileSplicer`] and [`processor::splice_file_with_processor`].

pub mod error;
pub mod processor;
pub mod span;
pub mod utils;

pub use error::{MarkerRole, SpliceError};
pub use span::Span;
pub use utils::marker_utils::{locate_span, splice, splice_markers};
