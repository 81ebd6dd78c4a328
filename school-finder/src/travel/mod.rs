//! Multi-modal travel time estimation.
//!
//! Estimates are closed-form functions of the straight-line distance
//! between two points: there is no road or transit network. Walking,
//! cycling and driving use a fixed average speed each; public transit is
//! banded by distance with a fixed wait per band. The aggregator combines
//! the applicable modes for one origin/destination pair and adds a
//! morning rush-hour figure.

mod aggregate;
mod estimate;
mod rush_hour;
mod transit;

pub use aggregate::{RouteList, RouteOptions, aggregate, aggregate_distance, format_route_display};
pub use estimate::{
    CYCLING, DRIVING, SpeedModel, TransitDetail, TravelEstimate, TravelMode, WALKING,
    duration_minutes,
};
pub use rush_hour::{
    DEFAULT_DEPARTURE_HOUR, PEAK_HOURS, PEAK_MULTIPLIER, SHOULDER_HOURS, SHOULDER_MULTIPLIER,
    rush_hour_adjustment, rush_hour_multiplier,
};
pub use transit::{MIN_TRANSIT_DISTANCE_KM, TRANSIT_BANDS, TransitBand, TransitKind, estimate_public_transit};
