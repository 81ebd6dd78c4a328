//! Travel estimates and the fixed-speed mode models.

use std::fmt;

use serde::Serialize;

use crate::domain::SchoolBusInfo;

use super::transit::TransitKind;

/// Transport mode of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
    Cycling,
    Driving,
    PublicTransit,
    SchoolBus,
}

impl TravelMode {
    /// Returns the wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
            TravelMode::Driving => "driving",
            TravelMode::PublicTransit => "public_transit",
            TravelMode::SchoolBus => "school_bus",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public transit breakdown attached to a transit estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitDetail {
    /// Kind of transit the distance band assumes
    pub transit_type: TransitKind,

    /// Description of the lines involved
    pub lines: Vec<String>,

    /// Number of transfers
    pub transfers: u32,

    /// Fixed waiting time included in the duration
    pub wait_time_minutes: u32,
}

/// Estimated travel time for one mode between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelEstimate {
    pub mode: TravelMode,

    /// Straight-line distance, rounded to two decimals.
    pub distance_km: f64,

    /// Travel time. Absent for school bus entries.
    pub duration_minutes: Option<u32>,

    /// Travel time adjusted for morning traffic. Absent for school bus entries.
    pub morning_commute_minutes: Option<u32>,

    pub icon: &'static str,

    /// Label for display, e.g. "🚶 12 min walk".
    pub display: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_bus: Option<SchoolBusInfo>,
}

impl TravelEstimate {
    /// Estimate with a duration and no attachments.
    pub(crate) fn timed(
        mode: TravelMode,
        distance_km: f64,
        duration_minutes: u32,
        icon: &'static str,
        display: String,
    ) -> Self {
        Self {
            mode,
            distance_km: round_km(distance_km),
            duration_minutes: Some(duration_minutes),
            morning_commute_minutes: None,
            icon,
            display,
            transit: None,
            school_bus: None,
        }
    }

    /// School bus entry carrying the operator's details verbatim.
    pub fn school_bus(distance_km: f64, info: SchoolBusInfo) -> Self {
        Self {
            mode: TravelMode::SchoolBus,
            distance_km: round_km(distance_km),
            duration_minutes: None,
            morning_commute_minutes: None,
            icon: "🚌",
            display: "🚌 School bus available".to_string(),
            transit: None,
            school_bus: Some(info),
        }
    }
}

/// Round a distance to two decimal places.
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Minutes needed to cover `distance_km` at `speed_kmh`, rounded.
///
/// Zero and negative distances take zero minutes. Durations too long for
/// a `u32` saturate at `u32::MAX`.
pub fn duration_minutes(distance_km: f64, speed_kmh: f64) -> u32 {
    if !(distance_km > 0.0) {
        return 0;
    }
    // Float-to-int `as` saturates, so infinity maps to u32::MAX
    (distance_km / speed_kmh * 60.0).round() as u32
}

/// A mode travelling at a fixed average speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModel {
    pub mode: TravelMode,

    /// Average speed including stops.
    pub speed_kmh: f64,

    /// Longest trip worth suggesting; `None` means always suggested.
    pub max_minutes: Option<u32>,

    pub icon: &'static str,

    /// Text after the minutes in the display label.
    pub suffix: &'static str,
}

/// Walking at 5 km/h, suggested up to 45 minutes.
pub const WALKING: SpeedModel = SpeedModel {
    mode: TravelMode::Walking,
    speed_kmh: 5.0,
    max_minutes: Some(45),
    icon: "🚶",
    suffix: "min walk",
};

/// Cycling at 15 km/h, suggested up to an hour.
pub const CYCLING: SpeedModel = SpeedModel {
    mode: TravelMode::Cycling,
    speed_kmh: 15.0,
    max_minutes: Some(60),
    icon: "🚴",
    suffix: "min by bike",
};

/// Urban driving at 30 km/h, always suggested.
pub const DRIVING: SpeedModel = SpeedModel {
    mode: TravelMode::Driving,
    speed_kmh: 30.0,
    max_minutes: None,
    icon: "🚗",
    suffix: "min drive",
};

impl SpeedModel {
    /// Estimate for a distance, regardless of the inclusion rule.
    pub fn estimate(&self, distance_km: f64) -> TravelEstimate {
        let minutes = duration_minutes(distance_km, self.speed_kmh);
        TravelEstimate::timed(
            self.mode,
            distance_km,
            minutes,
            self.icon,
            format!("{} {} {}", self.icon, minutes, self.suffix),
        )
    }

    /// Returns true if a trip of this many minutes is worth suggesting.
    pub fn admits(&self, minutes: u32) -> bool {
        self.max_minutes.is_none_or(|max| minutes <= max)
    }

    /// Estimate for a distance, if the inclusion rule passes.
    pub fn suggest(&self, distance_km: f64) -> Option<TravelEstimate> {
        let estimate = self.estimate(distance_km);
        estimate
            .duration_minutes
            .is_some_and(|m| self.admits(m))
            .then_some(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_rounds_to_nearest_minute() {
        // 1 km at 5 km/h = 12 min
        assert_eq!(duration_minutes(1.0, 5.0), 12);
        // 1.1 km at 15 km/h = 4.4 min
        assert_eq!(duration_minutes(1.1, 15.0), 4);
        // 1.2 km at 15 km/h = 4.8 min
        assert_eq!(duration_minutes(1.2, 15.0), 5);
    }

    #[test]
    fn zero_or_negative_distance_is_zero_minutes() {
        assert_eq!(duration_minutes(0.0, 5.0), 0);
        assert_eq!(duration_minutes(-3.0, 30.0), 0);
        assert_eq!(duration_minutes(f64::NAN, 30.0), 0);
    }

    #[test]
    fn huge_distance_saturates() {
        assert_eq!(duration_minutes(1e12, 5.0), u32::MAX);
        assert_eq!(duration_minutes(f64::INFINITY, 30.0), u32::MAX);

        let est = DRIVING.suggest(f64::INFINITY).unwrap();
        assert_eq!(est.duration_minutes, Some(u32::MAX));
        assert!(WALKING.suggest(f64::INFINITY).is_none());
    }

    #[test]
    fn walking_inclusion_threshold() {
        // 3.75 km = 45 min, 3.8 km = 46 min
        assert_eq!(WALKING.suggest(3.75).unwrap().duration_minutes, Some(45));
        assert!(WALKING.suggest(3.8).is_none());
    }

    #[test]
    fn cycling_inclusion_threshold() {
        // 15 km = 60 min, 15.2 km = 61 min
        assert_eq!(CYCLING.suggest(15.0).unwrap().duration_minutes, Some(60));
        assert!(CYCLING.suggest(15.2).is_none());
    }

    #[test]
    fn driving_always_included() {
        let est = DRIVING.suggest(500.0).unwrap();
        assert_eq!(est.duration_minutes, Some(1000));
        assert!(DRIVING.admits(u32::MAX));
    }

    #[test]
    fn display_labels() {
        assert_eq!(WALKING.estimate(1.0).display, "🚶 12 min walk");
        assert_eq!(CYCLING.estimate(1.5).display, "🚴 6 min by bike");
        assert_eq!(DRIVING.estimate(4.0).display, "🚗 8 min drive");
    }

    #[test]
    fn distance_rounded_to_two_decimals() {
        let est = DRIVING.estimate(12.3456);
        assert_eq!(est.distance_km, 12.35);
    }

    #[test]
    fn school_bus_has_no_duration() {
        let info = SchoolBusInfo {
            route_name: Some("Route B".into()),
            pickup_time: Some("08:15".into()),
            pickup_location: Some("Dorpsplein".into()),
        };
        let est = TravelEstimate::school_bus(3.0, info.clone());
        assert_eq!(est.mode, TravelMode::SchoolBus);
        assert!(est.duration_minutes.is_none());
        assert!(est.morning_commute_minutes.is_none());
        assert_eq!(est.school_bus, Some(info));
        assert_eq!(est.display, "🚌 School bus available");
    }

    #[test]
    fn mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&TravelMode::PublicTransit).unwrap(),
            "\"public_transit\""
        );
        assert_eq!(TravelMode::SchoolBus.to_string(), "school_bus");
    }
}
