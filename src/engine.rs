use crate::error::TreelineError;
use crate::options::TreelineOptions;
use crate::tree::render_listing;
use crate::types::{Entry, Listing};
use ignore::WalkBuilder;
use std::fs;
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &TreelineOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        // Turn off every gitignore-style filter, then re-enable only the
        // hidden-entry filter. The walker never applies it to the root itself.
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn collect_entries(self) -> Result<Vec<Entry>, TreelineError> {
        self.inner
            .filter_map(|result| match result {
                Ok(entry) if entry.depth() == 0 => None,
                Ok(entry) => Some(Ok(Entry {
                    depth: entry.depth(),
                    is_dir: entry.file_type().is_some_and(|t| t.is_dir()),
                    path: entry.into_path(),
                })),
                Err(e) => Some(Err(TreelineError::Walk(e.to_string()))),
            })
            .collect()
    }
}
pub fn treeline(options: TreelineOptions) -> Result<Listing, TreelineError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting treeline with root: {}", options.root.display());
    let root = fs::canonicalize(&options.root).map_err(|e| TreelineError::io(&options.root, e))?;
    let metadata = fs::metadata(&root).map_err(|e| TreelineError::io(&root, e))?;
    if !metadata.is_dir() {
        return Err(TreelineError::NotADirectory(root));
    }
    let walker = Walker::new(&options);
    let entries = walker.collect_entries()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} entries", entries.len());
    let tree = render_listing(&root, &entries, options.initial_indent);
    Ok(Listing {
        root,
        entries,
        tree,
    })
}
