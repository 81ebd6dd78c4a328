//! Morning rush-hour adjustment.

use std::ops::RangeInclusive;

/// Hour assumed when a request gives no departure time.
pub const DEFAULT_DEPARTURE_HOUR: u32 = 8;

/// Peak morning traffic.
pub const PEAK_HOURS: RangeInclusive<u32> = 7..=9;

/// Busy hours either side of the peak.
pub const SHOULDER_HOURS: RangeInclusive<u32> = 6..=10;

pub const PEAK_MULTIPLIER: f64 = 1.25;
pub const SHOULDER_MULTIPLIER: f64 = 1.15;

/// Traffic multiplier for a departure hour.
pub fn rush_hour_multiplier(hour: u32) -> f64 {
    if PEAK_HOURS.contains(&hour) {
        PEAK_MULTIPLIER
    } else if SHOULDER_HOURS.contains(&hour) {
        SHOULDER_MULTIPLIER
    } else {
        1.0
    }
}

/// Scale a base duration for morning traffic at the given departure hour.
///
/// Without a departure hour, [`DEFAULT_DEPARTURE_HOUR`] is assumed.
///
/// # Examples
///
/// ```
/// use school_finder::travel::rush_hour_adjustment;
///
/// assert_eq!(rush_hour_adjustment(40, Some(8)), 50);
/// assert_eq!(rush_hour_adjustment(20, Some(10)), 23);
/// assert_eq!(rush_hour_adjustment(20, Some(14)), 20);
/// assert_eq!(rush_hour_adjustment(40, None), 50);
/// ```
pub fn rush_hour_adjustment(base_minutes: u32, departure_hour: Option<u32>) -> u32 {
    let hour = departure_hour.unwrap_or(DEFAULT_DEPARTURE_HOUR);
    (f64::from(base_minutes) * rush_hour_multiplier(hour)).round() as u32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Adjustment never shortens a trip and never adds more than the peak factor
        #[test]
        fn adjustment_bounded(base in 0u32..10_000, hour in 0u32..24) {
            let adjusted = rush_hour_adjustment(base, Some(hour));
            prop_assert!(adjusted >= base);
            prop_assert!(f64::from(adjusted) <= (f64::from(base) * PEAK_MULTIPLIER).round());
        }
    }
}
