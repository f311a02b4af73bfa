//! Command-line interface for treeline.
//!
//! This binary provides access to the treeline library functionality,
//! walking a directory tree and printing the indented listing to stdout.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treeline::{TreelineBuilder, treeline};

/// treeline — indented directory tree listing
#[derive(Parser)]
#[command(name = "treeline", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let options = TreelineBuilder::new(cli.root).build();

    match treeline(options) {
        Ok(listing) => {
            println!("Directory structure for: {}", listing.root.display());
            println!("{}", listing.tree);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
