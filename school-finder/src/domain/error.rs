//! Domain error types.
//!
//! These errors represent request validation failures. They are raised
//! before any computation happens and are distinct from collaborator
//! (storage, geocoding) errors.

/// Validation errors for coordinates and request parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Latitude is not a finite value in [-90, 90]
    #[error("invalid latitude {0}: must be between -90 and 90")]
    InvalidLatitude(f64),

    /// Longitude is not a finite value in [-180, 180]
    #[error("invalid longitude {0}: must be between -180 and 180")]
    InvalidLongitude(f64),

    /// Search radius is zero, negative or not finite
    #[error("invalid radius {0} km: must be a positive number")]
    InvalidRadius(f64),

    /// Result limit is zero
    #[error("invalid limit: must be at least 1")]
    InvalidLimit,

    /// Departure hour is outside 0..=23
    #[error("invalid departure hour {0}: must be between 0 and 23")]
    InvalidDepartureHour(u32),
}
