use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Protein target already met")]
    AlreadyMet,

    #[error("No protein content in {0}")]
    NoProteinContent(String),

    #[error("Export service returned {status}: {body}")]
    ExportServer { status: u16, body: String },

    #[error("Export transport error: {0}")]
    ExportTransport(#[from] reqwest::Error),

    #[error("AI response malformed: {0}")]
    AiResponseMalformed(String),

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
}

pub type Result<T> = std::result::Result<T, NutriError>;
