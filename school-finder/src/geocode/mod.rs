//! Address geocoding.
//!
//! Turns free-form user addresses into coordinates for proximity search
//! and travel estimation. The HTTP backend talks to a Nominatim server;
//! a cache and a fixed lookup table wrap or replace it.

mod cache;
mod client;
mod error;
mod fixed;

use std::fmt;

use futures::future::BoxFuture;

use crate::domain::Coordinate;

pub use cache::{CacheConfig, CachedGeocoder};
pub use client::{GeocoderConfig, NominatimGeocoder};
pub use error::GeocodeError;
pub use fixed::FixedGeocoder;

/// A parsed address lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressQuery {
    /// Street and house number, absent for city-only lookups.
    pub street: Option<String>,
    pub city: String,
}

impl AddressQuery {
    /// Parse a free-form address.
    ///
    /// `"Damrak 1, Amsterdam"` becomes a street query in Amsterdam; text
    /// without a comma is looked up as a city. Anything after the second
    /// comma is ignored. Returns `None` for blank input.
    ///
    /// ```
    /// use school_finder::geocode::AddressQuery;
    ///
    /// let q = AddressQuery::parse("Damrak 1, Amsterdam").unwrap();
    /// assert_eq!(q.street.as_deref(), Some("Damrak 1"));
    /// assert_eq!(q.city, "Amsterdam");
    ///
    /// let q = AddressQuery::parse("Utrecht").unwrap();
    /// assert!(q.street.is_none());
    ///
    /// assert!(AddressQuery::parse("  ").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split(',').map(str::trim);
        let first = parts.next().unwrap_or_default();

        match parts.next() {
            Some(city) if !city.is_empty() => Some(Self {
                street: (!first.is_empty()).then(|| first.to_string()),
                city: city.to_string(),
            }),
            _ if !first.is_empty() => Some(Self::city(first)),
            _ => None,
        }
    }

    /// City-only query.
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            street: None,
            city: city.into(),
        }
    }

    /// Case- and whitespace-insensitive key identifying this query.
    pub fn cache_key(&self) -> String {
        let street = self.street.as_deref().unwrap_or_default();
        format!(
            "{}|{}",
            normalize(street),
            normalize(&self.city)
        )
    }
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.street {
            Some(street) => write!(f, "{}, {}", street, self.city),
            None => f.write_str(&self.city),
        }
    }
}

/// Resolves addresses to coordinates.
///
/// `Ok(None)` means the address is unknown; `Err` means the lookup itself
/// failed.
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(
        &'a self,
        query: &'a AddressQuery,
    ) -> BoxFuture<'a, Result<Option<Coordinate>, GeocodeError>>;
}

impl<G: Geocoder + ?Sized> Geocoder for std::sync::Arc<G> {
    fn geocode<'a>(
        &'a self,
        query: &'a AddressQuery,
    ) -> BoxFuture<'a, Result<Option<Coordinate>, GeocodeError>> {
        (**self).geocode(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_street_and_city() {
        let q = AddressQuery::parse(" Coolsingel 40 ,  Rotterdam ").unwrap();
        assert_eq!(q.street.as_deref(), Some("Coolsingel 40"));
        assert_eq!(q.city, "Rotterdam");
        assert_eq!(q.to_string(), "Coolsingel 40, Rotterdam");
    }

    #[test]
    fn parse_ignores_extra_parts() {
        let q = AddressQuery::parse("Neude 11, Utrecht, Netherlands").unwrap();
        assert_eq!(q.street.as_deref(), Some("Neude 11"));
        assert_eq!(q.city, "Utrecht");
    }

    #[test]
    fn parse_city_only() {
        let q = AddressQuery::parse("Groningen").unwrap();
        assert_eq!(q, AddressQuery::city("Groningen"));
        assert_eq!(q.to_string(), "Groningen");
    }

    #[test]
    fn parse_degenerate_input() {
        assert!(AddressQuery::parse("").is_none());
        assert!(AddressQuery::parse(" , ").is_none());
        // No city after the comma: treat the first part as the city
        assert_eq!(
            AddressQuery::parse("Leiden,"),
            Some(AddressQuery::city("Leiden"))
        );
        // No street before the comma
        assert_eq!(
            AddressQuery::parse(", Delft"),
            Some(AddressQuery::city("Delft"))
        );
    }

    #[test]
    fn cache_key_is_normalized() {
        let a = AddressQuery::parse("Damrak  1, AMSTERDAM").unwrap();
        let b = AddressQuery::parse("damrak 1,amsterdam").unwrap();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "damrak 1|amsterdam");

        let city = AddressQuery::city("Amsterdam");
        assert_ne!(city.cache_key(), a.cache_key());
    }
}
