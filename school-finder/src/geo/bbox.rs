//! Latitude/longitude boxes used to pre-filter candidates.
//!
//! A box is a cheap superset of the disk of a given radius around a
//! center. It never decides inclusion on its own: callers must follow it
//! with an exact [`great_circle_distance`](super::great_circle_distance)
//! check.

use serde::Serialize;

use crate::domain::Coordinate;

use super::EARTH_RADIUS_KM;

/// Kilometres per degree of latitude (and of longitude on the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Axis-aligned latitude/longitude rectangle in decimal degrees.
///
/// Bounds are not clamped, so a box near a pole may extend past ±90
/// latitude and a box near the antimeridian past ±180 longitude.
/// [`BoundingBox::contains`] accounts for both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Returns true if the coordinate lies inside the box.
    ///
    /// Longitude ranges that extend past ±180 wrap around the antimeridian.
    pub fn contains(&self, point: Coordinate) -> bool {
        let lat = point.latitude();
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }

        if self.spans_all_longitudes() {
            return true;
        }

        let lon = point.longitude();
        [lon, lon - 360.0, lon + 360.0]
            .into_iter()
            .any(|l| l >= self.min_lon && l <= self.max_lon)
    }

    /// Returns true if the longitude range covers the whole globe.
    pub fn spans_all_longitudes(&self) -> bool {
        !(self.max_lon - self.min_lon < 360.0)
    }
}

/// Bounding box around `center` for a radius in kilometres.
///
/// The latitude offset is `radius_km / 111` degrees. The longitude offset
/// is `radius_km / (111 · cos(center latitude))` degrees, which is only
/// accurate close to the center's latitude: for large radii, points near
/// the poleward edge can fall outside the box. Use [`covering_box`] when
/// that matters.
///
/// # Examples
///
/// ```
/// use school_finder::domain::Coordinate;
/// use school_finder::geo::bounding_box;
///
/// let center = Coordinate::new(0.0, 0.0).unwrap();
/// let bbox = bounding_box(center, 111.0);
/// assert!((bbox.max_lat - 1.0).abs() < 1e-12);
/// assert!((bbox.min_lon + 1.0).abs() < 1e-12);
/// ```
pub fn bounding_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    let lat_offset = radius_km / KM_PER_DEGREE;
    let lon_offset = radius_km / (KM_PER_DEGREE * center.latitude().to_radians().cos());

    around(center, lat_offset, lon_offset)
}

/// Bounding box that contains the whole radius disk around `center`.
///
/// The latitude offset matches [`bounding_box`]. The longitude offset is
/// the widest longitude a circle of the given radius can reach, evaluated
/// at the box's poleward edge where a degree of longitude is shortest:
/// `asin(sin(radius / R) / cos(poleward latitude))`. If the box reaches a
/// pole the longitude range covers the whole globe.
pub fn covering_box(center: Coordinate, radius_km: f64) -> BoundingBox {
    let lat_offset = radius_km / KM_PER_DEGREE;
    let poleward = center.latitude().abs() + lat_offset;
    let reach = (radius_km / EARTH_RADIUS_KM).sin() / poleward.to_radians().cos();

    if poleward >= 90.0 || !(reach < 1.0) {
        return BoundingBox {
            min_lat: center.latitude() - lat_offset,
            max_lat: center.latitude() + lat_offset,
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let lon_offset = reach.asin().to_degrees();
    around(center, lat_offset, lon_offset)
}

fn around(center: Coordinate, lat_offset: f64, lon_offset: f64) -> BoundingBox {
    BoundingBox {
        min_lat: center.latitude() - lat_offset,
        max_lat: center.latitude() + lat_offset,
        min_lon: center.longitude() - lon_offset,
        max_lon: center.longitude() + lon_offset,
    }
}
