use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct TreelineOptions {
    pub root: PathBuf,
    pub initial_indent: usize,
}
impl Default for TreelineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            initial_indent: 0,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreelineBuilder {
    options: TreelineOptions,
}
impl TreelineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreelineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn initial_indent(mut self, indent: usize) -> Self {
        self.options.initial_indent = indent;
        self
    }
    pub fn build(self) -> TreelineOptions {
        self.options
    }
}
