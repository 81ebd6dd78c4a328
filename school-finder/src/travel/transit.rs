//! Distance-banded public transit estimates.
//!
//! There is no timetable or network here. Each band assumes a typical
//! vehicle mix with an average speed including stops, plus a fixed wait.

use serde::Serialize;

use super::estimate::{TransitDetail, TravelEstimate, TravelMode, duration_minutes};

/// Kind of transit a distance band assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitKind {
    BusTram,
    BusMetro,
    Train,
}

/// One distance band of the transit heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitBand {
    /// Band applies from this distance (inclusive) up to the next band.
    pub min_km: f64,
    pub speed_kmh: f64,
    pub wait_minutes: u32,
    pub kind: TransitKind,
    pub transfers: u32,
    pub icon: &'static str,
    /// Short label used in display text.
    pub label: &'static str,
    /// Description of the lines used.
    pub lines: &'static str,
}

/// Below this distance walking beats transit, so no estimate is made.
pub const MIN_TRANSIT_DISTANCE_KM: f64 = 2.0;

/// Transit bands in ascending order of `min_km`.
pub const TRANSIT_BANDS: [TransitBand; 3] = [
    TransitBand {
        min_km: MIN_TRANSIT_DISTANCE_KM,
        speed_kmh: 20.0,
        wait_minutes: 5,
        kind: TransitKind::BusTram,
        transfers: 0,
        icon: "🚌",
        label: "bus/tram",
        lines: "Estimated route",
    },
    TransitBand {
        min_km: 5.0,
        speed_kmh: 25.0,
        wait_minutes: 8,
        kind: TransitKind::BusMetro,
        transfers: 1,
        icon: "🚇",
        label: "metro/bus",
        lines: "Metro or bus line",
    },
    TransitBand {
        min_km: 15.0,
        speed_kmh: 40.0,
        wait_minutes: 10,
        kind: TransitKind::Train,
        transfers: 1,
        icon: "🚂",
        label: "train + bus",
        lines: "Train line + local transport",
    },
];

impl TransitBand {
    /// The band covering a distance, if transit is worth estimating.
    pub fn for_distance(distance_km: f64) -> Option<&'static TransitBand> {
        TRANSIT_BANDS
            .iter()
            .rev()
            .find(|band| distance_km >= band.min_km)
    }

    /// Travel time in this band: riding time plus the fixed wait.
    pub fn duration_minutes(&self, distance_km: f64) -> u32 {
        duration_minutes(distance_km, self.speed_kmh).saturating_add(self.wait_minutes)
    }
}

/// Public transit estimate for a straight-line distance.
///
/// Returns `None` under [`MIN_TRANSIT_DISTANCE_KM`].
pub fn estimate_public_transit(distance_km: f64) -> Option<TravelEstimate> {
    let band = TransitBand::for_distance(distance_km)?;
    let minutes = band.duration_minutes(distance_km);

    let mut estimate = TravelEstimate::timed(
        TravelMode::PublicTransit,
        distance_km,
        minutes,
        band.icon,
        format!("{} {} min ({})", band.icon, minutes, band.label),
    );
    estimate.transit = Some(TransitDetail {
        transit_type: band.kind,
        lines: vec![band.lines.to_string()],
        transfers: band.transfers,
        wait_time_minutes: band.wait_minutes,
    });

    Some(estimate)
}
