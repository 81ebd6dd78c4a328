//! Route aggregation for a single origin/destination pair.

use serde::Serialize;

use crate::domain::{Coordinate, SchoolBusInfo, ValidationError};
use crate::geo::great_circle_distance;

use super::estimate::{CYCLING, DRIVING, TravelEstimate, TravelMode, WALKING};
use super::rush_hour::rush_hour_adjustment;
use super::transit::estimate_public_transit;

/// Options for route aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    /// Hour of departure (0-23) for the rush-hour figure.
    pub departure_hour: Option<u32>,

    /// Whether to list the school bus when bus details are available.
    pub include_school_bus: bool,

    /// Operator-provided bus details.
    pub school_bus: Option<SchoolBusInfo>,
}

impl RouteOptions {
    /// Options with no departure hour and no school bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the departure hour.
    pub fn with_departure_hour(mut self, hour: u32) -> Self {
        self.departure_hour = Some(hour);
        self
    }

    /// Request the school bus entry with the given details.
    pub fn with_school_bus(mut self, info: SchoolBusInfo) -> Self {
        self.include_school_bus = true;
        self.school_bus = Some(info);
        self
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.departure_hour {
            Some(hour) if hour > 23 => Err(ValidationError::InvalidDepartureHour(hour)),
            _ => Ok(()),
        }
    }
}

/// Travel estimates for one trip, fastest first.
///
/// Entries other than the school bus are sorted by ascending duration;
/// school bus entries always come last.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteList(Vec<TravelEstimate>);

impl RouteList {
    /// Number of estimates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no mode applies.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the estimates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TravelEstimate> {
        self.0.iter()
    }

    /// The estimate for a mode, if present.
    pub fn get(&self, mode: TravelMode) -> Option<&TravelEstimate> {
        self.0.iter().find(|e| e.mode == mode)
    }

    /// The estimates as a slice.
    pub fn as_slice(&self) -> &[TravelEstimate] {
        &self.0
    }

    /// Consume the list, returning the estimates.
    pub fn into_inner(self) -> Vec<TravelEstimate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RouteList {
    type Item = &'a TravelEstimate;
    type IntoIter = std::slice::Iter<'a, TravelEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// All applicable travel estimates between two coordinates.
pub fn aggregate(origin: Coordinate, destination: Coordinate, options: &RouteOptions) -> RouteList {
    aggregate_distance(great_circle_distance(origin, destination), options)
}

/// All applicable travel estimates for a straight-line distance.
///
/// Walking and cycling are listed only within their time limits, public
/// transit only from its minimum distance, driving always. The school bus
/// is listed when requested and details are present, with no time limit.
pub fn aggregate_distance(distance_km: f64, options: &RouteOptions) -> RouteList {
    let mut regular: Vec<TravelEstimate> = [
        WALKING.suggest(distance_km),
        CYCLING.suggest(distance_km),
        estimate_public_transit(distance_km),
        DRIVING.suggest(distance_km),
    ]
    .into_iter()
    .flatten()
    .collect();

    // Stable, so equal durations keep the order above
    regular.sort_by_key(|e| e.duration_minutes);

    for estimate in &mut regular {
        if let Some(minutes) = estimate.duration_minutes {
            let morning = rush_hour_adjustment(minutes, options.departure_hour);
            estimate.morning_commute_minutes = Some(morning);
            if morning != minutes {
                estimate.display.push_str(&format!(" (morning: {morning} min)"));
            }
        }
    }

    if options.include_school_bus
        && let Some(info) = &options.school_bus
    {
        regular.push(TravelEstimate::school_bus(distance_km, info.clone()));
    }

    RouteList(regular)
}

/// Render a route list as display lines, one per estimate.
pub fn format_route_display(routes: &RouteList) -> String {
    if routes.is_empty() {
        return "Transportation information not available".to_string();
    }

    routes
        .iter()
        .map(|r| r.display.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes(routes: &RouteList) -> Vec<TravelMode> {
        routes.iter().map(|r| r.mode).collect()
    }

    fn bus() -> SchoolBusInfo {
        SchoolBusInfo {
            route_name: Some("Route B".into()),
            pickup_time: Some("08:15".into()),
            pickup_location: Some("Kerkplein".into()),
        }
    }

    #[test]
    fn short_trip_has_no_transit() {
        let routes = aggregate_distance(1.5, &RouteOptions::new());

        // driving 3, cycling 6, walking 18
        assert_eq!(
            modes(&routes),
            vec![TravelMode::Driving, TravelMode::Cycling, TravelMode::Walking]
        );
        assert!(routes.get(TravelMode::PublicTransit).is_none());
        assert_eq!(routes.get(TravelMode::Walking).unwrap().duration_minutes, Some(18));
    }

    #[test]
    fn long_trip_at_rush_hour() {
        let routes = aggregate_distance(20.0, &RouteOptions::new().with_departure_hour(8));

        // walking (240) and cycling (80) exceed their limits
        assert_eq!(
            modes(&routes),
            vec![TravelMode::PublicTransit, TravelMode::Driving]
        );

        let transit = routes.get(TravelMode::PublicTransit).unwrap();
        assert_eq!(transit.duration_minutes, Some(40));
        assert_eq!(transit.transit.as_ref().unwrap().wait_time_minutes, 10);
        assert_eq!(transit.morning_commute_minutes, Some(50));

        let driving = routes.get(TravelMode::Driving).unwrap();
        assert_eq!(driving.duration_minutes, Some(40));
        assert_eq!(driving.morning_commute_minutes, Some(50));
        assert_eq!(driving.display, "🚗 40 min drive (morning: 50 min)");
    }

    #[test]
    fn off_peak_display_has_no_suffix() {
        let routes = aggregate_distance(4.0, &RouteOptions::new().with_departure_hour(14));
        let driving = routes.get(TravelMode::Driving).unwrap();
        assert_eq!(driving.morning_commute_minutes, Some(8));
        assert_eq!(driving.display, "🚗 8 min drive");
    }

    #[test]
    fn default_departure_is_eight() {
        let implicit = aggregate_distance(6.0, &RouteOptions::new());
        let explicit = aggregate_distance(6.0, &RouteOptions::new().with_departure_hour(8));
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn school_bus_always_last() {
        let routes = aggregate_distance(2.5, &RouteOptions::new().with_school_bus(bus()));

        let last = routes.as_slice().last().unwrap();
        assert_eq!(last.mode, TravelMode::SchoolBus);
        assert_eq!(last.school_bus, Some(bus()));
        assert!(last.duration_minutes.is_none());
        assert!(last.morning_commute_minutes.is_none());
        assert_eq!(
            routes.iter().filter(|r| r.mode == TravelMode::SchoolBus).count(),
            1
        );
    }

    #[test]
    fn school_bus_needs_request_and_details() {
        let details_only = RouteOptions {
            school_bus: Some(bus()),
            ..RouteOptions::default()
        };
        assert!(
            aggregate_distance(2.5, &details_only)
                .get(TravelMode::SchoolBus)
                .is_none()
        );

        let request_only = RouteOptions {
            include_school_bus: true,
            ..RouteOptions::default()
        };
        assert!(
            aggregate_distance(2.5, &request_only)
                .get(TravelMode::SchoolBus)
                .is_none()
        );
    }

    #[test]
    fn same_location_is_zero_minutes() {
        let here = Coordinate::new(52.0, 5.0).unwrap();
        let routes = aggregate(here, here, &RouteOptions::new());

        assert_eq!(
            modes(&routes),
            vec![TravelMode::Walking, TravelMode::Cycling, TravelMode::Driving]
        );
        for r in &routes {
            assert_eq!(r.duration_minutes, Some(0));
            assert_eq!(r.morning_commute_minutes, Some(0));
            assert_eq!(r.distance_km, 0.0);
        }
    }

    #[test]
    fn aggregate_uses_great_circle_distance() {
        let amsterdam = Coordinate::new(52.3676, 4.9041).unwrap();
        let rotterdam = Coordinate::new(51.9225, 4.4792).unwrap();
        let routes = aggregate(amsterdam, rotterdam, &RouteOptions::new());

        let driving = routes.get(TravelMode::Driving).unwrap();
        assert!((driving.distance_km - 57.0).abs() < 1.0);
        assert_eq!(
            routes.get(TravelMode::PublicTransit).unwrap().transit.as_ref().unwrap().transit_type,
            crate::travel::TransitKind::Train
        );
    }

    #[test]
    fn very_large_distances_give_large_durations() {
        for distance in [1e10, f64::INFINITY] {
            let routes = aggregate_distance(distance, &RouteOptions::new().with_school_bus(bus()));

            assert_eq!(
                modes(&routes),
                vec![
                    TravelMode::PublicTransit,
                    TravelMode::Driving,
                    TravelMode::SchoolBus
                ]
            );
            for r in routes.iter().filter(|r| r.mode != TravelMode::SchoolBus) {
                assert_eq!(r.duration_minutes, Some(u32::MAX));
                assert_eq!(r.morning_commute_minutes, Some(u32::MAX));
            }
        }
    }

    #[test]
    fn validate_departure_hour() {
        assert!(RouteOptions::new().validate().is_ok());
        assert!(RouteOptions::new().with_departure_hour(23).validate().is_ok());
        assert_eq!(
            RouteOptions::new().with_departure_hour(24).validate(),
            Err(ValidationError::InvalidDepartureHour(24))
        );
    }

    #[test]
    fn display_summary() {
        let routes = aggregate_distance(1.5, &RouteOptions::new().with_departure_hour(12));
        assert_eq!(
            format_route_display(&routes),
            "🚗 3 min drive\n🚴 6 min by bike\n🚶 18 min walk"
        );
        assert_eq!(
            format_route_display(&RouteList::default()),
            "Transportation information not available"
        );
    }

    #[test]
    fn serializes_as_array() {
        let routes = aggregate_distance(1.5, &RouteOptions::new());
        let json = serde_json::to_value(&routes).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["mode"], "driving");
        assert!(array[0].get("transit").is_none());
    }
}
