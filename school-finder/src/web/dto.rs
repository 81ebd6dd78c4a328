//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Institution, InstitutionType, SchoolBusInfo};
use crate::search::ScoredResult;
use crate::store::AttributeFilters;
use crate::travel::RouteList;

/// Query for institutions near a point.
///
/// The center is either `lat` + `lon` or a free-form `address`.
/// Attribute filters are listed explicitly rather than flattened, since
/// flattened fields lose their types in query strings.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub address: Option<String>,

    /// Search radius in km (defaults and caps come from the search config)
    pub radius_km: Option<f64>,

    /// Maximum number of results
    pub limit: Option<usize>,

    pub institution_type: Option<InstitutionType>,
    pub city: Option<String>,
    pub name: Option<String>,
    pub min_rating: Option<f64>,
    pub bilingual: Option<bool>,
    pub international: Option<bool>,
    pub offers_english: Option<bool>,
}

impl NearbyRequest {
    /// The attribute filters carried by this request.
    pub fn filters(&self) -> AttributeFilters {
        AttributeFilters {
            institution_type: self.institution_type,
            city: self.city.clone(),
            name: self.name.clone(),
            min_rating: self.min_rating,
            bilingual: self.bilingual,
            international: self.international,
            offers_english: self.offers_english,
        }
    }
}

/// Institutions within the radius, nearest first.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// Resolved search center
    pub center: Coordinate,

    /// Effective radius after defaults and caps
    pub radius_km: f64,

    pub results: Vec<ScoredResult<Institution>>,
}

/// Query for travel options from a point to an institution.
#[derive(Debug, Default, Deserialize)]
pub struct TransportationRequest {
    pub from_address: Option<String>,
    pub from_lat: Option<f64>,
    pub from_lon: Option<f64>,

    /// Departure time in HH:MM format (defaults to the morning peak)
    pub departure_time: Option<String>,

    /// Whether to list the institution's school bus
    pub include_school_bus: Option<bool>,
}

/// Travel options to an institution.
#[derive(Debug, Serialize)]
pub struct TransportationResponse {
    pub institution_id: u64,
    pub institution_name: String,

    /// Resolved origin
    pub from: Coordinate,

    pub routes: RouteList,

    /// One display line per route
    pub summary: String,
}

/// Travel options between two explicit points.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,

    /// Hour of departure, 0-23
    pub departure_hour: Option<u32>,

    #[serde(default)]
    pub include_school_bus: bool,

    pub school_bus: Option<SchoolBusInfo>,
}

/// Response to a route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Great-circle distance between the points
    pub distance_km: f64,

    pub routes: RouteList,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_request_validates_coordinates() {
        let ok: Result<RouteRequest, _> = serde_json::from_str(
            r#"{
                "origin": {"latitude": 52.37, "longitude": 4.89},
                "destination": {"latitude": 52.09, "longitude": 5.12}
            }"#,
        );
        let req = ok.unwrap();
        assert!(!req.include_school_bus);
        assert!(req.departure_hour.is_none());

        let bad: Result<RouteRequest, _> = serde_json::from_str(
            r#"{
                "origin": {"latitude": 152.37, "longitude": 4.89},
                "destination": {"latitude": 52.09, "longitude": 5.12}
            }"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn nearby_filters() {
        let req = NearbyRequest {
            city: Some("Delft".into()),
            bilingual: Some(true),
            ..Default::default()
        };
        let filters = req.filters();
        assert_eq!(filters.city.as_deref(), Some("Delft"));
        assert_eq!(filters.bilingual, Some(true));
        assert!(filters.institution_type.is_none());

        assert!(NearbyRequest::default().filters().is_empty());
    }
}
