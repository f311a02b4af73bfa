use std::fs;
use tempfile::tempdir;
use treeline::{TreelineBuilder, treeline};
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# readme").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join(".gitignore"), "target\n").unwrap();
    let options = TreelineBuilder::new(dir.path()).build();
    let listing = treeline(options).unwrap();
    let root_name = listing.root.file_name().unwrap().to_str().unwrap();
    let expected = format!(
        "|{root_name}\n|----README.md\n|----src\n|--------lib.rs\n|--------main.rs"
    );
    assert_eq!(listing.tree, expected);
    assert_eq!(listing.entries.len(), 4);
}
