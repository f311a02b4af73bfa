//! # Treeline
//!
//! `treeline` is a library for recursively walking a directory tree and rendering it as a
//! plain-text listing, one line per entry, indented in proportion to nesting depth.
//!
//! Hidden entries (base name starting with `.`) are skipped, siblings are listed in
//! lexicographic order, and directories print their own line before their contents. The
//! root itself is always printed, even when its own name is hidden.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treeline::{TreelineBuilder, treeline};
//!
//! let options = TreelineBuilder::new(".").build();
//!
//! let listing = treeline(options).expect("Failed to list directory");
//!
//! println!("Directory structure for: {}", listing.root.display());
//! println!("{}", listing.tree);
//! ```

mod engine;
mod error;
mod options;
mod tree;
mod types;

pub use engine::treeline;
pub use error::TreelineError;
pub use options::{TreelineBuilder, TreelineOptions};
pub use types::{Entry, Listing};
