//! Haversine great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// The result is finite, non-negative and symmetric for every pair of
/// valid coordinates.
///
/// # Examples
///
/// ```
/// use school_finder::domain::Coordinate;
/// use school_finder::geo::great_circle_distance;
///
/// let amsterdam = Coordinate::new(52.3676, 4.9041).unwrap();
/// let rotterdam = Coordinate::new(51.9225, 4.4792).unwrap();
///
/// let km = great_circle_distance(amsterdam, rotterdam);
/// assert!((km - 57.0).abs() < 1.0);
/// assert_eq!(great_circle_distance(amsterdam, amsterdam), 0.0);
/// ```
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h slightly outside [0, 1] near identical or
    // antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn amsterdam_to_rotterdam() {
        let amsterdam = coord(52.3676, 4.9041);
        let rotterdam = coord(51.9225, 4.4792);

        let km = great_circle_distance(amsterdam, rotterdam);
        assert!((km - 57.0).abs() < 1.0, "got {km}");
    }

    #[test]
    fn same_point_is_zero() {
        let utrecht = coord(52.0907, 5.1214);
        assert_eq!(great_circle_distance(utrecht, utrecht), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2πR / 360
        let km = great_circle_distance(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((km - 111.195).abs() < 0.01, "got {km}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let km = great_circle_distance(coord(0.0, 0.0), coord(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((km - half).abs() < 1e-6, "got {km}");

        let km = great_circle_distance(coord(90.0, 0.0), coord(-90.0, 0.0));
        assert!((km - half).abs() < 1e-6, "got {km}");
    }

    #[test]
    fn crosses_antimeridian() {
        // 0.2 degrees of longitude on the equator, across ±180
        let km = great_circle_distance(coord(0.0, 179.9), coord(0.0, -179.9));
        assert!((km - 22.239).abs() < 0.01, "got {km}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(a in coordinate()) {
            prop_assert_eq!(great_circle_distance(a, a), 0.0);
        }

        #[test]
        fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
            let ab = great_circle_distance(a, b);
            let ba = great_circle_distance(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }

        /// Never negative, never more than half the circumference
        #[test]
        fn distance_is_bounded(a in coordinate(), b in coordinate()) {
            let d = great_circle_distance(a, b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
