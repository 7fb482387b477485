// crates/splice_markers/src/processor/file_processor.rs

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::span::Span;
use crate::utils::atomic_write::write_atomically;
use crate::utils::marker_utils::{locate_span, splice};

/// What to splice into a file.
#[derive(Clone, Copy, Debug)]
pub struct SpliceRequest<'a> {
    pub start_marker: &'a str,
    pub end_marker: &'a str,
    pub replacement: &'a str,
    /// Compute the result without writing it.
    pub dry_run: bool,
}

/// Result of a successful splice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpliceOutcome {
    /// Span of the original document that was replaced.
    pub span: Span,
    pub removed_bytes: usize,
    pub inserted_bytes: usize,
    /// False when the replacement reproduced the span exactly.
    pub changed: bool,
    /// True once the new document has been persisted.
    pub written: bool,
    /// The new document, only populated for dry runs.
    pub preview: Option<String>,
}

/// Trait that abstracts splicing a file on disk.
pub trait FileSplicer {
    fn splice_file(&self, file_path: &Path, request: &SpliceRequest<'_>) -> Result<SpliceOutcome>;
}

/// Reads the whole file, splices in memory and replaces the file atomically.
/// A `SpliceError` aborts before anything is written.
pub struct DefaultFileSplicer;

impl FileSplicer for DefaultFileSplicer {
    fn splice_file(&self, file_path: &Path, request: &SpliceRequest<'_>) -> Result<SpliceOutcome> {
        let document = fs::read_to_string(file_path)
            .with_context(|| format!("Error reading file {}", file_path.display()))?;

        let span = locate_span(&document, request.start_marker, request.end_marker)?;
        let updated = splice(&document, span, request.replacement)?;

        let outcome = SpliceOutcome {
            span,
            removed_bytes: span.len(),
            inserted_bytes: request.replacement.len(),
            changed: updated != document,
            written: false,
            preview: None,
        };

        if request.dry_run {
            debug!("dry run: {} left untouched", file_path.display());
            return Ok(SpliceOutcome {
                preview: Some(updated),
                ..outcome
            });
        }

        if !outcome.changed {
            warn!("{} already holds the replacement; skipping write", file_path.display());
            return Ok(outcome);
        }

        write_atomically(file_path, &updated)?;
        info!(
            "replaced {}..{} in {} ({} bytes removed, {} inserted)",
            span.start,
            span.end,
            file_path.display(),
            outcome.removed_bytes,
            outcome.inserted_bytes
        );
        Ok(SpliceOutcome {
            written: true,
            ..outcome
        })
    }
}

/// Public API function to splice a file using a provided `FileSplicer` implementation.
pub fn splice_file_with_processor<P: AsRef<Path>>(
    splicer: &dyn FileSplicer,
    file_path: P,
    request: &SpliceRequest<'_>,
) -> Result<SpliceOutcome> {
    splicer.splice_file(file_path.as_ref(), request)
}
