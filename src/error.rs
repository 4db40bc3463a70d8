use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreedocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid root: {0}")]
    InvalidRoot(String),
}
impl TreedocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreedocError::Io {
            path: path.into(),
            source,
        }
    }
}
