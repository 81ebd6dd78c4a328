//! Search configuration for proximity queries.

/// Configuration parameters for proximity search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius used when a request does not specify one (km).
    pub default_radius_km: f64,

    /// Largest radius a request may ask for (km).
    /// Larger requests are clamped to this value.
    pub max_radius_km: f64,

    /// Number of results returned when a request does not specify a limit.
    pub default_limit: usize,

    /// Largest number of results a request may ask for.
    pub max_limit: usize,

    /// Pre-filter with a box that covers the whole radius disk rather than
    /// one scaled at the center's latitude.
    pub widen_longitude: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_radius_km: f64,
        max_radius_km: f64,
        default_limit: usize,
        max_limit: usize,
        widen_longitude: bool,
    ) -> Self {
        Self {
            default_radius_km,
            max_radius_km,
            default_limit,
            max_limit,
            widen_longitude,
        }
    }

    /// Resolve a requested radius against the defaults and the cap.
    pub fn radius_km(&self, requested: Option<f64>) -> f64 {
        let radius = requested.unwrap_or(self.default_radius_km);
        // NaN and infinity are left for validation to reject
        if radius.is_finite() {
            radius.min(self.max_radius_km)
        } else {
            radius
        }
    }

    /// Resolve a requested limit against the defaults and the cap.
    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 5.0,
            max_radius_km: 100.0,
            default_limit: 100,
            max_limit: 500,
            widen_longitude: true,
        }
    }
}
