use axum::{extract::State, response::Response, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::config::app::{APP_NAME, APP_VERSION, COMPANY_NAME, CURRENCY};
use crate::routes::action_routes::dispatch_response;
use crate::state::AppState;
use crate::utils::dates::iso_timestamp;

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/test", get(test_endpoint))
        .route("/api/system", get(system_info))
        .route("/api/dashboard", get(dashboard))
}

async fn system_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "appName": APP_NAME,
        "version": APP_VERSION,
        "company": COMPANY_NAME,
        "currency": CURRENCY,
        "environment": state.config.environment,
        "storageType": state.facade.storage_type(),
        "localBackend": state.facade.local().backend_name(),
    }))
}

async fn dashboard(State(state): State<AppState>) -> Response {
    dispatch_response(state.facade.dashboard_stats().await)
}

/// Endpoint de prueba
async fn test_endpoint(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Al Aksha back-office API running",
        "status": "ok",
        "timestamp": iso_timestamp(state.clock.now_utc()),
        "storageType": state.facade.storage_type(),
    }))
}
