//! Respuesta genérica del facade
//!
//! Misma forma para el endpoint remoto y el almacenamiento local:
//! `{ success, data?, message? }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Éxito sin datos (p. ej. un borrado)
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Datos como lista; cualquier otra forma cuenta como lista vacía
    pub fn into_list(self) -> Vec<serde_json::Value> {
        match self.data {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        }
    }
}
