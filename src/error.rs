use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreelineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
impl TreelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreelineError::Io {
            path: path.into(),
            source,
        }
    }
}
