//! Geocoding error types.

use crate::domain::ValidationError;

/// Errors from a geocoding backend.
///
/// An address that simply has no match is not an error; geocoders
/// return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client configuration is unusable
    #[error("invalid geocoder configuration: {0}")]
    Config(String),

    /// Geocoding service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Service returned a position outside the valid ranges
    #[error("geocoder returned an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ValidationError),
}
