// crates/splice_markers/src/utils/marker_utils.rs

use log::debug;

use crate::error::{MarkerRole, SpliceError};
use crate::span::Span;

fn ensure_marker(marker: &str, role: MarkerRole) -> Result<(), SpliceError> {
    if marker.is_empty() {
        return Err(SpliceError::EmptyMarker { role });
    }
    Ok(())
}

/// Locates the span bounded by `start_marker` and `end_marker`.
///
/// The span begins at the first byte of the first occurrence of
/// `start_marker` and ends at the first byte of the first occurrence of
/// `end_marker` found after the start marker's text. An end marker that only
/// appears earlier in the document is ignored.
///
/// # Errors
///
/// Returns `SpliceError::MarkerNotFound` if either marker is missing and
/// `SpliceError::EmptyMarker` if either marker is the empty string.
pub fn locate_span(document: &str, start_marker: &str, end_marker: &str) -> Result<Span, SpliceError> {
    ensure_marker(start_marker, MarkerRole::Start)?;
    ensure_marker(end_marker, MarkerRole::End)?;

    let start = document
        .find(start_marker)
        .ok_or_else(|| SpliceError::MarkerNotFound {
            role: MarkerRole::Start,
            marker: start_marker.to_string(),
        })?;

    let search_from = start + start_marker.len();
    let end = document[search_from..]
        .find(end_marker)
        .map(|offset| search_from + offset)
        .ok_or_else(|| SpliceError::MarkerNotFound {
            role: MarkerRole::End,
            marker: end_marker.to_string(),
        })?;

    debug!("located span {}..{} ({} bytes)", start, end, end - start);
    Ok(Span::new(start, end))
}

/// Returns `document[..span.start] + replacement + document[span.end..]`.
pub fn splice(document: &str, span: Span, replacement: &str) -> Result<String, SpliceError> {
    span.validate(document)?;
    let mut output = String::with_capacity(document.len() - span.len() + replacement.len());
    output.push_str(&document[..span.start]);
    output.push_str(replacement);
    output.push_str(&document[span.end..]);
    Ok(output)
}

/// Locates the marker-bounded span and replaces it in one step.
pub fn splice_markers(
    document: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String, SpliceError> {
    let span = locate_span(document, start_marker, end_marker)?;
    splice(document, span, replacement)
}
