use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error for {wallet}: {message}")]
    ApiError { wallet: String, message: String },

    #[error("Invalid block timestamp {raw:?}: {source}")]
    TimestampError {
        raw: String,
        source: chrono::ParseError,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
