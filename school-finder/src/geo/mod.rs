//! Spherical-earth geometry.
//!
//! Great-circle distance, the latitude/longitude box used as a cheap
//! pre-filter before exact distance checks, and human-readable distance
//! formatting. Everything here is pure and allocation-free apart from
//! formatting.

mod bbox;
mod distance;
mod format;

pub use bbox::{BoundingBox, KM_PER_DEGREE, bounding_box, covering_box};
pub use distance::{EARTH_RADIUS_KM, great_circle_distance};
pub use format::format_distance;
