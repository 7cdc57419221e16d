use thiserror::Error;

use crate::location::LocationError;

/// Error types for the skycard application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when a required environment variable is missing or empty
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(&'static str),

    /// Error when the weather API returns a non-2xx status
    #[error("API request failed with status {0}")]
    ApiRequestFailed(reqwest::StatusCode),

    /// Wrapper for location service errors
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for URL construction errors
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}
