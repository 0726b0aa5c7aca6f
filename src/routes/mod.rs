//! Rutas HTTP

pub mod action_routes;
pub mod system_routes;
pub mod vessel_order_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(system_routes::create_system_router())
        .merge(action_routes::create_action_router())
        .merge(vessel_order_routes::create_vessel_order_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
