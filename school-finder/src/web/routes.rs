//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveTime, Timelike};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Coordinate, ValidationError};
use crate::geo::great_circle_distance;
use crate::geocode::{AddressQuery, GeocodeError, Geocoder};
use crate::search::{ProximitySearch, SearchCriteria};
use crate::store::StoreError;
use crate::travel::{RouteOptions, aggregate, aggregate_distance, format_route_display};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/institutions/nearby", get(nearby))
        .route(
            "/api/institutions/:id/transportation",
            get(transportation),
        )
        .route("/api/routes", post(plan_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search institutions around a point or an address.
async fn nearby(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    let center = resolve_location(
        state.geocoder.as_ref(),
        req.lat,
        req.lon,
        req.address.as_deref(),
    )
    .await?;

    let filters = req.filters();
    let candidates = state.store.find(&filters)?;

    let radius_km = state.config.radius_km(req.radius_km);
    let limit = state.config.limit(req.limit);
    let criteria = SearchCriteria::new(center, radius_km, limit).with_filters(filters);

    let results = ProximitySearch::new(&state.config).search(candidates, &criteria)?;

    Ok(Json(NearbyResponse {
        center,
        radius_km,
        results,
    }))
}

/// Travel options from a point or an address to an institution.
async fn transportation(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(req): Query<TransportationRequest>,
) -> Result<Json<TransportationResponse>, AppError> {
    let institution = state.store.get(id)?.ok_or_else(|| AppError::NotFound {
        message: format!("Institution not found: {id}"),
    })?;

    let destination = institution.location.ok_or_else(|| AppError::BadRequest {
        message: format!("Institution {id} has no location"),
    })?;

    let from = resolve_location(
        state.geocoder.as_ref(),
        req.from_lat,
        req.from_lon,
        req.from_address.as_deref(),
    )
    .await?;

    let options = RouteOptions {
        departure_hour: parse_departure_hour(req.departure_time.as_deref())?,
        include_school_bus: req.include_school_bus.unwrap_or(false),
        school_bus: institution.school_bus.clone(),
    };
    options.validate()?;

    let routes = aggregate(from, destination, &options);
    let summary = format_route_display(&routes);

    Ok(Json(TransportationResponse {
        institution_id: institution.id,
        institution_name: institution.name,
        from,
        routes,
        summary,
    }))
}

/// Travel options between two explicit points.
async fn plan_routes(Json(req): Json<RouteRequest>) -> Result<Json<RouteResponse>, AppError> {
    let options = RouteOptions {
        departure_hour: req.departure_hour,
        include_school_bus: req.include_school_bus,
        school_bus: req.school_bus,
    };
    options.validate()?;

    let distance_km = great_circle_distance(req.origin, req.destination);
    let routes = aggregate_distance(distance_km, &options);

    Ok(Json(RouteResponse {
        distance_km,
        routes,
    }))
}

/// Resolve a location given either as coordinates or as an address.
async fn resolve_location(
    geocoder: &dyn Geocoder,
    lat: Option<f64>,
    lon: Option<f64>,
    address: Option<&str>,
) -> Result<Coordinate, AppError> {
    match (lat, lon, address) {
        (Some(lat), Some(lon), _) => Ok(Coordinate::new(lat, lon)?),
        (None, None, Some(address)) => {
            let query = AddressQuery::parse(address).ok_or_else(|| AppError::BadRequest {
                message: "Address must not be empty".to_string(),
            })?;

            geocoder
                .geocode(&query)
                .await?
                .ok_or_else(|| AppError::NotFound {
                    message: format!("Could not geocode address: {query}"),
                })
        }
        _ => Err(AppError::BadRequest {
            message: "Provide either latitude and longitude, or an address".to_string(),
        }),
    }
}

/// Parse an optional HH:MM departure time into its hour.
fn parse_departure_hour(time: Option<&str>) -> Result<Option<u32>, AppError> {
    time.map(|t| {
        NaiveTime::parse_from_str(t.trim(), "%H:%M")
            .map(|parsed| parsed.hour())
            .map_err(|_| AppError::BadRequest {
                message: format!("Invalid departure_time: {t} (expected HH:MM)"),
            })
    })
    .transpose()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
