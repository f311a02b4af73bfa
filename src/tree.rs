//! Internal module for rendering collected entries into the listing text.

use crate::types::Entry;
use std::path::Path;

/// Dashes added per nesting level.
const INDENT_STEP: usize = 4;

/// Renders the line-oriented listing for a root and its visited entries.
///
/// Each line is `|`, a run of dashes equal to `initial_indent` plus
/// [`INDENT_STEP`] per nesting level, then the entry's base name. The root's
/// line comes first at depth zero. Directories and files render identically.
pub(crate) fn render_listing(root: &Path, entries: &[Entry], initial_indent: usize) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(render_line(root, 0, initial_indent));

    for entry in entries {
        lines.push(render_line(&entry.path, entry.depth, initial_indent));
    }

    lines.join("\n")
}

fn render_line(path: &Path, depth: usize, initial_indent: usize) -> String {
    // A filesystem root has no final component and renders an empty name.
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let indent = initial_indent + INDENT_STEP * depth;
    format!("|{}{}", "-".repeat(indent), name)
}
