use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cuerpo de las escrituras: `{"action": ..., "data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub data: Value,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>, data: Value) -> Self {
        Self {
            action: action.into(),
            data,
        }
    }
}
