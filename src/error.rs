use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HomescoutError {
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HomescoutError>;

impl From<serde_json::Error> for HomescoutError {
    fn from(e: serde_json::Error) -> Self {
        HomescoutError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for HomescoutError {
    fn from(e: reqwest::Error) -> Self {
        HomescoutError::Fetch(e.to_string())
    }
}
