use thiserror::Error;

/// Errors that can occur while talking to the recipe catalog
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("{context} (HTTP {status})")]
    HttpStatus { context: String, status: u16 },

    /// The response body was not the expected JSON shape
    #[error("Failed to parse catalog response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A lookup returned no meal for the given id
    #[error("No meal found with id {0}")]
    NotFound(String),

    /// Caller passed an unusable argument (blank id or category)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
