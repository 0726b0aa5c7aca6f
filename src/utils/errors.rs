//! Errores de la capa HTTP
//!
//! Solo las peticiones mal formadas llegan aquí. Los fallos de negocio
//! ("Record not found", acciones desconocidas) y los del almacenamiento
//! viajan como `ApiResponse` con `success = false`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Cuerpo JSON de un error
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Petición incorrecta: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        code: "BAD_REQUEST".to_string(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
