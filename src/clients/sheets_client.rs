//! Cliente HTTP del endpoint de la hoja de cálculo

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{RemoteEndpoint, RemoteError};
use crate::dto::{ActionRequest, ApiResponse};
use crate::models::record::value_as_key;

pub struct SheetsClient {
    client: Client,
    base_url: String,
}

impl SheetsClient {
    /// Crear cliente con timeout configurable
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL de lectura con la acción y los parámetros en la query string
    fn read_url(&self, action: &str, params: &Value) -> String {
        let mut query = format!("action={}", urlencoding::encode(action));
        if let Some(params) = params.as_object() {
            for (key, value) in params {
                if let Some(value) = value_as_key(value) {
                    query.push('&');
                    query.push_str(&urlencoding::encode(key));
                    query.push('=');
                    query.push_str(&urlencoding::encode(&value));
                }
            }
        }
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, query)
    }

    async fn parse_response(response: reqwest::Response) -> Result<ApiResponse, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl RemoteEndpoint for SheetsClient {
    async fn get(&self, action: &str, params: &Value) -> Result<ApiResponse, RemoteError> {
        let url = self.read_url(action, params);
        debug!("🌐 GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::parse_response(response).await
    }

    async fn post(&self, action: &str, data: &Value) -> Result<ApiResponse, RemoteError> {
        debug!("🌐 POST {} action={}", self.base_url, action);
        let body = serde_json::to_string(&ActionRequest::new(action, data.clone()))
            .map_err(|e| RemoteError::MalformedBody(e.to_string()))?;

        // text/plain evita el preflight CORS del script de la hoja
        let response = self
            .client
            .post(&self.base_url)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_url_encodes_params() {
        let client = SheetsClient::new("https://script.example/exec", Duration::from_secs(5)).unwrap();
        let url = client.read_url("getSalary", &json!({ "month": 1, "year": "2024", "skip": null }));
        assert!(url.starts_with("https://script.example/exec?action=getSalary"));
        assert!(url.contains("&month=1"));
        assert!(url.contains("&year=2024"));
        assert!(!url.contains("skip"));

        let url = client.read_url("getGuardDuty", &json!({ "date": "15/01/2024" }));
        assert!(url.ends_with("date=15%2F01%2F2024"));
    }

    #[test]
    fn test_read_url_appends_to_existing_query() {
        let client = SheetsClient::new("https://script.example/exec?v=2", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.read_url("getClients", &Value::Null),
            "https://script.example/exec?v=2&action=getClients"
        );
    }
}
