//! Human-readable distance labels.

/// Format a distance for display.
///
/// Distances under one kilometre are shown in whole metres, everything
/// else in kilometres with one decimal place. The unit is picked from the
/// unrounded distance, so values just under 1 km read "1000 m".
///
/// # Examples
///
/// ```
/// use school_finder::geo::format_distance;
///
/// assert_eq!(format_distance(0.5), "500 m");
/// assert_eq!(format_distance(1.0), "1.0 km");
/// assert_eq!(format_distance(12.34), "12.3 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1} km")
    }
}
