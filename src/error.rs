#[derive(Debug, thiserror::Error)]
pub enum DeckInfoError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to decode deck string: {0}")]
    DecodeFailure(String),

    #[error("Failed to fetch card data: {0}")]
    FetchFailure(String),

    #[error("Failed to fetch card data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid card catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Superseded by a newer deck submission")]
    Superseded,
}

pub type Result<T> = std::result::Result<T, DeckInfoError>;
