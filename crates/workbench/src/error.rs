use thiserror::Error;

use stylemap::EditError;

#[derive(Error, Debug)]
pub enum WorkbenchError {
    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("Preference file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A logger was already installed")]
    LoggerInstalled,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, WorkbenchError>;
