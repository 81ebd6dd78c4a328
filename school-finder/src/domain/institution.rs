//! Institution records and the location accessor used by the search engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Anything with an optional geographic position.
///
/// The proximity search only needs this accessor; candidates without a
/// coordinate are skipped.
pub trait Located {
    /// The entity's position, if known.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

impl Located for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

/// Error returned when parsing an unknown institution type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid institution type: {value}")]
pub struct InvalidInstitutionType {
    value: String,
}

/// Kind of education institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionType {
    /// Daycare and after-school care (0-4 years)
    Childcare,
    /// Primary school (4-12 years)
    Primary,
    /// Secondary school (12-18 years)
    Secondary,
    /// Vocational education
    Mbo,
    /// University of applied sciences
    Hbo,
    /// Research university
    University,
}

impl InstitutionType {
    /// All institution types, in age order.
    pub const ALL: [InstitutionType; 6] = [
        InstitutionType::Childcare,
        InstitutionType::Primary,
        InstitutionType::Secondary,
        InstitutionType::Mbo,
        InstitutionType::Hbo,
        InstitutionType::University,
    ];

    /// Returns the wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionType::Childcare => "childcare",
            InstitutionType::Primary => "primary",
            InstitutionType::Secondary => "secondary",
            InstitutionType::Mbo => "mbo",
            InstitutionType::Hbo => "hbo",
            InstitutionType::University => "university",
        }
    }

    /// Parse a type name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidInstitutionType> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| InvalidInstitutionType {
                value: s.to_string(),
            })
    }
}

impl FromStr for InstitutionType {
    type Err = InvalidInstitutionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-provided school bus details, carried verbatim into route lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolBusInfo {
    /// Route name (e.g., "Route B")
    pub route_name: Option<String>,

    /// Pickup time as published by the operator (e.g., "08:15")
    pub pickup_time: Option<String>,

    /// Pickup location description
    pub pickup_location: Option<String>,
}

/// An education institution as held by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: u64,
    pub name: String,
    pub institution_type: InstitutionType,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,

    /// Position, if the address has been geocoded.
    #[serde(default)]
    pub location: Option<Coordinate>,

    /// Inspection rating on a 0-10 scale.
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub is_bilingual: bool,
    #[serde(default)]
    pub is_international: bool,
    #[serde(default)]
    pub offers_english: bool,

    /// School bus service, if the institution runs one.
    #[serde(default)]
    pub school_bus: Option<SchoolBusInfo>,
}

impl Institution {
    /// Create an institution with only the required fields set.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        institution_type: InstitutionType,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            institution_type,
            city: city.into(),
            address: None,
            postal_code: None,
            location: None,
            rating: None,
            is_bilingual: false,
            is_international: false,
            offers_english: false,
            school_bus: None,
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Located for Institution {
    fn coordinate(&self) -> Option<Coordinate> {
        self.location
    }
}
