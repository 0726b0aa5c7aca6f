//! Clientes HTTP para servicios externos
//!
//! El único servicio externo es el endpoint CRUD respaldado por la hoja de
//! cálculo. El facade lo consume a través de `RemoteEndpoint` para poder
//! sustituirlo en tests.

pub mod sheets_client;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::dto::ApiResponse;

pub use sheets_client::SheetsClient;

/// Fallos del endpoint remoto. Todos provocan la caída al almacenamiento local.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

#[async_trait]
pub trait RemoteEndpoint: Send + Sync {
    /// Lectura: `GET url?action=...&params`
    async fn get(&self, action: &str, params: &Value) -> Result<ApiResponse, RemoteError>;

    /// Escritura: `POST url` con `{"action": ..., "data": ...}`
    async fn post(&self, action: &str, data: &Value) -> Result<ApiResponse, RemoteError>;
}
