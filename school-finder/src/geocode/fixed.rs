//! Offline geocoder backed by a fixed table.

use std::collections::HashMap;

use futures::future::BoxFuture;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::{AddressQuery, Geocoder};

/// Geocoder that answers from a fixed table of known addresses.
///
/// Used when running without network access, and in tests. Lookups are
/// case- and whitespace-insensitive; anything not in the table is unknown.
#[derive(Debug, Clone, Default)]
pub struct FixedGeocoder {
    entries: HashMap<String, Coordinate>,
}

impl FixedGeocoder {
    /// Create an empty geocoder that knows no addresses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a known address.
    pub fn with_entry(mut self, query: &AddressQuery, coordinate: Coordinate) -> Self {
        self.entries.insert(query.cache_key(), coordinate);
        self
    }

    /// Number of known addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no addresses are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode<'a>(
        &'a self,
        query: &'a AddressQuery,
    ) -> BoxFuture<'a, Result<Option<Coordinate>, GeocodeError>> {
        let found = self.entries.get(&query.cache_key()).copied();
        Box::pin(async move { Ok(found) })
    }
}
