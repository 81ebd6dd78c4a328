//! Web layer for the school finder.
//!
//! Provides HTTP endpoints for nearby-institution search and travel
//! estimates. Handlers stay thin: they resolve locations, fetch
//! candidates from the store and hand off to the search and travel
//! modules.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
