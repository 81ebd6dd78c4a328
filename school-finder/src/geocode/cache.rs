//! Caching layer for geocoding lookups.
//!
//! Addresses rarely move, so results are kept for a day. Misses are
//! cached too: users retry the same mistyped address, and the public
//! Nominatim server allows one request per second.

use std::time::Duration;

use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::{AddressQuery, Geocoder};

/// Configuration for the geocoding cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geocoder with caching.
///
/// Wraps any [`Geocoder`] and caches successful lookups, keyed by
/// [`AddressQuery::cache_key`]. Errors are never cached.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: MokaCache<String, Option<Coordinate>>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Create a new cached geocoder.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Number of cached lookups (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    async fn lookup(&self, query: &AddressQuery) -> Result<Option<Coordinate>, GeocodeError> {
        let key = query.cache_key();

        if let Some(cached) = self.cache.get(&key).await {
            debug!(%query, "Geocode cache hit");
            return Ok(cached);
        }

        let found = self.inner.geocode(query).await?;
        self.cache.insert(key, found).await;

        Ok(found)
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    fn geocode<'a>(
        &'a self,
        query: &'a AddressQuery,
    ) -> BoxFuture<'a, Result<Option<Coordinate>, GeocodeError>> {
        Box::pin(self.lookup(query))
    }
}
