//! Radius search over located candidates.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::{Coordinate, Located, ValidationError};
use crate::geo::{BoundingBox, bounding_box, covering_box, great_circle_distance};
use crate::store::AttributeFilters;

use super::config::SearchConfig;
use super::result::ScoredResult;

/// Parameters of a single proximity query.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Search center.
    pub center: Coordinate,

    /// Search radius in kilometres.
    pub radius_km: f64,

    /// Maximum number of results.
    pub limit: usize,

    /// Attribute filters. These are applied by the storage layer when it
    /// produces candidates; the search itself ignores them.
    pub filters: AttributeFilters,
}

impl SearchCriteria {
    /// Create criteria with no attribute filters.
    pub fn new(center: Coordinate, radius_km: f64, limit: usize) -> Self {
        Self {
            center,
            radius_km,
            limit,
            filters: AttributeFilters::default(),
        }
    }

    /// Set the attribute filters.
    pub fn with_filters(mut self, filters: AttributeFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Validate the criteria.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err(ValidationError::InvalidRadius(self.radius_km));
        }

        if self.limit == 0 {
            return Err(ValidationError::InvalidLimit);
        }

        Ok(())
    }
}

/// Proximity search engine.
///
/// Stateless apart from its configuration; a single engine can serve
/// concurrent requests.
pub struct ProximitySearch<'a> {
    config: &'a SearchConfig,
}

impl<'a> ProximitySearch<'a> {
    /// Create a new search engine.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// The pre-filter box used for the given criteria.
    pub fn prefilter(&self, criteria: &SearchCriteria) -> BoundingBox {
        if self.config.widen_longitude {
            covering_box(criteria.center, criteria.radius_km)
        } else {
            bounding_box(criteria.center, criteria.radius_km)
        }
    }

    /// Find candidates within the radius, nearest first.
    ///
    /// Candidates without a coordinate are skipped. The result holds at most
    /// `criteria.limit` entries sorted by ascending distance; ties keep
    /// their input order. An empty candidate set gives an empty result.
    pub fn search<T, I>(
        &self,
        candidates: I,
        criteria: &SearchCriteria,
    ) -> Result<Vec<ScoredResult<T>>, ValidationError>
    where
        T: Located,
        I: IntoIterator<Item = T>,
    {
        criteria.validate()?;

        let bbox = self.prefilter(criteria);
        let mut considered = 0usize;
        let mut in_box = 0usize;

        let mut results: Vec<ScoredResult<T>> = candidates
            .into_iter()
            .inspect(|_| considered += 1)
            .filter_map(|candidate| {
                let position = candidate.coordinate()?;
                if !bbox.contains(position) {
                    return None;
                }
                in_box += 1;

                // The box is a superset of the disk
                let distance_km = great_circle_distance(criteria.center, position);
                (distance_km <= criteria.radius_km)
                    .then(|| ScoredResult::new(candidate, distance_km))
            })
            .collect();

        results.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });

        let matched = results.len();
        results.truncate(criteria.limit);

        debug!(
            center = %criteria.center,
            radius_km = criteria.radius_km,
            considered,
            in_box,
            matched,
            returned = results.len(),
            "Proximity search complete"
        );

        Ok(results)
    }
}
