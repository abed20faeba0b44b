use thiserror::Error;

/// Main error type for the StockX client
#[derive(Debug, Error)]
pub enum StockXError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StockXError {
    /// True for errors raised because the decoded JSON lacked an expected key
    /// or had the wrong structure.
    pub fn is_shape(&self) -> bool {
        matches!(self, StockXError::MissingField(_) | StockXError::Shape(_))
    }
}

/// Result type alias using StockXError
pub type Result<T> = std::result::Result<T, StockXError>;
