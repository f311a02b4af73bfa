use std::path::PathBuf;

/// A single visited entry under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The full path to the entry.
    pub path: PathBuf,
    /// Nesting depth relative to the root (direct children are at depth 1).
    pub depth: usize,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// The complete result of a treeline operation.
#[derive(Debug, Clone)]
pub struct Listing {
    /// The canonicalized absolute root path.
    pub root: PathBuf,
    /// All visited entries in output order. The root itself is not included.
    pub entries: Vec<Entry>,
    /// The rendered listing.
    ///
    /// One line per entry, each prefixed with `|` and a run of `-` characters
    /// proportional to depth, starting with the root's own line.
    pub tree: String,
}
