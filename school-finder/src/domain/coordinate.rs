//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// This type guarantees that any `Coordinate` value is valid by
/// construction, including values deserialized from JSON.
///
/// # Examples
///
/// ```
/// use school_finder::domain::Coordinate;
///
/// let amsterdam = Coordinate::new(52.3676, 4.9041).unwrap();
/// assert_eq!(amsterdam.latitude(), 52.3676);
///
/// // Out-of-range values are rejected
/// assert!(Coordinate::new(90.1, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -181.0).is_err());
///
/// // NaN is rejected
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form of a coordinate.
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = ValidationError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        // Range checks on NaN are false, so NaN falls through to the error
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
