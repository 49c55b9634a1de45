use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid food entry: {0}")]
    InvalidFood(String),

    #[error("Food catalog is empty")]
    EmptyCatalog,

    #[error("Model training failed: {0}")]
    Training(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
