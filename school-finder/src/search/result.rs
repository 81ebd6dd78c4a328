//! Distance-annotated search results.

use serde::Serialize;

use crate::geo::format_distance;

/// A candidate that survived the radius filter, with its distance.
///
/// Serializes with the candidate's fields flattened next to
/// `distance_km` and `distance_formatted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<T> {
    #[serde(flatten)]
    pub item: T,

    /// Great-circle distance from the search center.
    pub distance_km: f64,

    /// Display form of `distance_km` (e.g., "750 m", "2.4 km").
    pub distance_formatted: String,
}

impl<T> ScoredResult<T> {
    /// Wrap a candidate with its distance.
    pub fn new(item: T, distance_km: f64) -> Self {
        Self {
            item,
            distance_km,
            distance_formatted: format_distance(distance_km),
        }
    }

    /// Transform the wrapped candidate, keeping the distance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScoredResult<U> {
        ScoredResult {
            item: f(self.item),
            distance_km: self.distance_km,
            distance_formatted: self.distance_formatted,
        }
    }
}
