// crates/edit_modal_patch/src/lib.rs

//! The built-in patch applied by `splice_template` when no overrides are
//! given: it rewrites `openEditModal` in the admin floor-plans panel.

/// Template file, relative to the project root.
pub const DEFAULT_TARGET: &str = "client/views/admin/partials/floor-plans-panel.ejs";

/// Opens the replaced span.
pub const START_MARKER: &str = "function openEditModal(planId)";

/// Closes the replaced span; the marker itself is kept.
pub const END_MARKER: &str = "function closeEditModal()";

/// Replacement block, carried verbatim.
pub const REPLACEMENT: &str = include_str!("../assets/open_edit_modal.js");
