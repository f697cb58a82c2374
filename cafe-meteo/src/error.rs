//! Errors raised while fetching or parsing weather data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoError {
    /// Transport failure or non-success status from the weather API.
    #[cfg(feature = "api")]
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("malformed weather response: {0}")]
    MalformedResponse(String),

    /// A `daily.time` entry could not be parsed as an ISO date.
    #[error("invalid date in weather response: {0}")]
    InvalidDate(String),

    /// The requested state name is not in the reference table.
    #[error("unknown estado: {0}")]
    UnknownEstado(String),
}
