//! Proximity search over attribute-filtered candidates.
//!
//! Candidates arrive already filtered by the storage layer. This module is
//! purely geometric: it drops candidates without a position, rejects those
//! outside a bounding box around the center, computes the exact
//! great-circle distance for the rest, keeps those within the radius and
//! returns them nearest-first, truncated to the requested limit.

mod config;
mod engine;
mod result;

pub use config::SearchConfig;
pub use engine::{ProximitySearch, SearchCriteria};
pub use result::ScoredResult;
