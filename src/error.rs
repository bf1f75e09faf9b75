use std::path::PathBuf;

use thiserror::Error;
use workbench::WorkbenchError;

#[derive(Error, Debug)]
pub enum RefactorError {
    #[error(transparent)]
    Workbench(#[from] WorkbenchError),

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line} is past the end of the file ({lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, RefactorError>;
