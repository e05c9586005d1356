pub mod health;
pub mod relay;

use axum::{middleware, Router};

use crate::cors;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(relay::relay_routes())
        .layer(middleware::from_fn_with_state(
            state.origins.clone(),
            cors::apply_cors,
        ))
        .merge(health::health_routes())
        .with_state(state)
}
