#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;

use al_aksha_backoffice::clients::RemoteEndpoint;
use al_aksha_backoffice::config::environment::EnvironmentConfig;
use al_aksha_backoffice::repositories::LocalRepository;
use al_aksha_backoffice::storage::{KeyValueStore, MemoryStore};
use al_aksha_backoffice::utils::clock::{Clock, FixedClock};
use al_aksha_backoffice::{create_router, ApiFacade, AppState};

/// Reloj fijo: 2024-01-10 08:00
pub fn test_clock() -> Arc<dyn Clock> {
    let now = NaiveDate::from_ymd_opt(2024, 1, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    Arc::new(FixedClock(now))
}

pub fn local_repository() -> Arc<LocalRepository> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    Arc::new(LocalRepository::new(store, test_clock()))
}

pub fn create_test_app(remote: Option<Arc<dyn RemoteEndpoint>>) -> Router {
    let facade = Arc::new(ApiFacade::new(remote, local_repository()));
    create_router(AppState::new(facade, EnvironmentConfig::default(), test_clock()))
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Igual que lo manda la página: JSON como `text/plain`
pub fn post_plain(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "text/plain;charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap()
}
