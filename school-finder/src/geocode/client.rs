//! Nominatim HTTP geocoder.

use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::{AddressQuery, Geocoder};

/// Default base URL of the public OpenStreetMap Nominatim server.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying User-Agent.
const DEFAULT_USER_AGENT: &str = "school-finder/0.1";

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim server
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// ISO 3166-1 country code lookups are restricted to
    pub country_code: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            country_code: "nl".to_string(),
            timeout_secs: 10,
        }
    }
}

impl GeocoderConfig {
    /// Set a custom base URL (self-hosted Nominatim, or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Restrict lookups to another country.
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    search_url: String,
    country_code: String,
}

impl NominatimGeocoder {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            GeocodeError::Config(format!("invalid User-Agent: {:?}", config.user_agent))
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
            country_code: config.country_code,
        })
    }

    /// Query parameters for a lookup.
    fn params(&self, query: &AddressQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
            ("countrycodes", self.country_code.clone()),
        ];

        match &query.street {
            Some(street) => params.push(("q", format!("{}, {}", street, query.city))),
            None => params.push(("city", query.city.clone())),
        }

        params
    }

    async fn lookup(&self, query: &AddressQuery) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .http
            .get(&self.search_url)
            .query(&self.params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%query, status = status.as_u16(), "Geocoding request failed");
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let found = parse_response(&body)?;

        match found {
            Some(coord) => debug!(%query, %coord, "Geocoded address"),
            None => debug!(%query, "No geocoding result"),
        }

        Ok(found)
    }
}

/// Extract the first result's position from a search response body.
fn parse_response(body: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let results: Vec<SearchResult> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let lat = parse_degrees(&first.lat)?;
    let lon = parse_degrees(&first.lon)?;

    Ok(Some(Coordinate::new(lat, lon)?))
}

fn parse_degrees(s: &str) -> Result<f64, GeocodeError> {
    s.trim().parse().map_err(|_| GeocodeError::Json {
        message: format!("invalid coordinate value: {s:?}"),
    })
}

impl Geocoder for NominatimGeocoder {
    fn geocode<'a>(
        &'a self,
        query: &'a AddressQuery,
    ) -> BoxFuture<'a, Result<Option<Coordinate>, GeocodeError>> {
        Box::pin(self.lookup(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NominatimGeocoder {
        NominatimGeocoder::new(GeocoderConfig::default()).unwrap()
    }

    #[test]
    fn search_url_from_base() {
        let geocoder =
            NominatimGeocoder::new(GeocoderConfig::default().with_base_url("http://localhost:8080/"))
                .unwrap();
        assert_eq!(geocoder.search_url, "http://localhost:8080/search");
        assert_eq!(
            client().search_url,
            "https://nominatim.openstreetmap.org/search"
        );
    }

    #[test]
    fn rejects_invalid_user_agent() {
        let config = GeocoderConfig {
            user_agent: "school\nfinder".to_string(),
            ..GeocoderConfig::default()
        };
        assert!(matches!(
            NominatimGeocoder::new(config),
            Err(GeocodeError::Config(_))
        ));
    }

    #[test]
    fn street_query_params() {
        let query = AddressQuery::parse("Damrak 1, Amsterdam").unwrap();
        let params = client().params(&query);

        assert!(params.contains(&("format", "json".to_string())));
        assert!(params.contains(&("limit", "1".to_string())));
        assert!(params.contains(&("q", "Damrak 1, Amsterdam".to_string())));
        assert!(params.contains(&("countrycodes", "nl".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "city"));
    }

    #[test]
    fn city_query_params() {
        let geocoder =
            NominatimGeocoder::new(GeocoderConfig::default().with_country("be")).unwrap();
        let params = geocoder.params(&AddressQuery::city("Gent"));

        assert!(params.contains(&("city", "Gent".to_string())));
        assert!(params.contains(&("countrycodes", "be".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "q"));
    }

    #[test]
    fn parse_first_result() {
        let body = r#"[
            {"lat": "52.3745", "lon": "4.8979", "display_name": "Damrak 1"},
            {"lat": "0", "lon": "0"}
        ]"#;
        let coord = parse_response(body).unwrap().unwrap();
        assert_eq!(coord.latitude(), 52.3745);
        assert_eq!(coord.longitude(), 4.8979);
    }

    #[test]
    fn parse_empty_result() {
        assert_eq!(parse_response("[]").unwrap(), None);
    }

    #[test]
    fn parse_malformed_result() {
        assert!(matches!(
            parse_response("{\"error\": 1}"),
            Err(GeocodeError::Json { .. })
        ));
        assert!(matches!(
            parse_response(r#"[{"lat": "north", "lon": "4.9"}]"#),
            Err(GeocodeError::Json { .. })
        ));
        assert!(matches!(
            parse_response(r#"[{"lat": "123.0", "lon": "4.9"}]"#),
            Err(GeocodeError::InvalidCoordinate(_))
        ));
    }
}
