//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::Geocoder;
use crate::search::SearchConfig;
use crate::store::InstitutionStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Institution records
    pub store: Arc<dyn InstitutionStore>,

    /// Address lookup
    pub geocoder: Arc<dyn Geocoder>,

    /// Proximity search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: impl InstitutionStore + 'static,
        geocoder: impl Geocoder + 'static,
        config: SearchConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            geocoder: Arc::new(geocoder),
            config: Arc::new(config),
        }
    }
}
