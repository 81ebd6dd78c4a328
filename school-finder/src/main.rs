use std::net::SocketAddr;

use school_finder::geocode::{
    CacheConfig, CachedGeocoder, FixedGeocoder, GeocoderConfig, NominatimGeocoder,
};
use school_finder::search::SearchConfig;
use school_finder::store::MemoryStore;
use school_finder::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "school_finder=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // Load the institution dataset (fail fast if unavailable)
    let dataset = std::env::var("INSTITUTIONS_PATH").unwrap_or_else(|_| "institutions.json".into());
    let store = MemoryStore::load(&dataset).expect("Failed to load institution dataset");
    if store.located_count() < store.len() {
        warn!(
            missing = store.len() - store.located_count(),
            "Some institutions have no location and will never match a proximity search"
        );
    }

    let search_config = SearchConfig::default();

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".into())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    // Build app state with the configured geocoder
    let state = if std::env::var_os("GEOCODER_OFFLINE").is_some() {
        info!("Geocoding disabled, address lookups will find nothing");
        AppState::new(store, FixedGeocoder::new(), search_config)
    } else {
        let mut geocoder_config = GeocoderConfig::default();
        if let Ok(url) = std::env::var("NOMINATIM_URL") {
            geocoder_config = geocoder_config.with_base_url(url);
        }
        if let Ok(code) = std::env::var("GEOCODER_COUNTRY") {
            geocoder_config = geocoder_config.with_country(code);
        }
        info!(base_url = %geocoder_config.base_url, "Using Nominatim geocoder");

        let nominatim =
            NominatimGeocoder::new(geocoder_config).expect("Failed to create geocoder client");
        let geocoder = CachedGeocoder::new(nominatim, &CacheConfig::default());
        AppState::new(store, geocoder, search_config)
    };

    let app = create_router(state);

    info!(%addr, "School finder listening");
    info!("  GET  /health                                - Health check");
    info!("  GET  /api/institutions/nearby               - Institutions near a point");
    info!("  GET  /api/institutions/:id/transportation   - Travel options to an institution");
    info!("  POST /api/routes                            - Travel options between two points");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
