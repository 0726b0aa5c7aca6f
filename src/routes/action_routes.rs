//! Rutas del vocabulario de acciones: `GET /api?action=...` y `POST /api`

use axum::{
    extract::{Query, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::dto::ActionRequest;
use crate::services::api_facade::Dispatch;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub const DATA_SOURCE_HEADER: &str = "x-data-source";

pub fn create_action_router() -> Router<AppState> {
    Router::new().route("/api", get(read_action).post(write_action))
}

/// Respuesta JSON con el origen de los datos en una cabecera
pub fn dispatch_response(dispatch: Dispatch) -> Response {
    let mut response = Json(dispatch.response).into_response();
    response.headers_mut().insert(
        DATA_SOURCE_HEADER,
        HeaderValue::from_static(dispatch.source.as_str()),
    );
    response
}

async fn read_action(
    State(state): State<AppState>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let action = params
        .remove("action")
        .filter(|a| !a.is_empty())
        .ok_or_else(|| bad_request_error("Missing action parameter"))?;

    let data: Map<String, Value> = params
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();

    let dispatch = state.facade.execute(&action, &Value::Object(data)).await;
    Ok(dispatch_response(dispatch))
}

/// El cuerpo puede llegar como `text/plain`, igual que al script de la hoja
async fn write_action(State(state): State<AppState>, body: String) -> Result<Response, AppError> {
    let request: ActionRequest = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid action body: {}", e)))?;

    let dispatch = state.facade.execute(&request.action, &request.data).await;
    Ok(dispatch_response(dispatch))
}
