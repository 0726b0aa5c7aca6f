mod common;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get as route_get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use al_aksha_backoffice::clients::{RemoteEndpoint, SheetsClient};
use al_aksha_backoffice::models::Entity;
use al_aksha_backoffice::{ApiFacade, DataSource};

use common::{body_json, create_test_app, get, local_repository, post_plain};

/// Lo que recibió el endpoint falso
#[derive(Clone, Default)]
struct Captured {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    bodies: Arc<Mutex<Vec<(Option<String>, String)>>>,
}

async fn fake_read(
    State(captured): State<Captured>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let action = query.get("action").cloned().unwrap_or_default();
    captured.queries.lock().unwrap().push(query);

    if action == "getClients" || action == "getVesselOrders" {
        return Json(json!({ "success": false, "message": "Sheet locked" }));
    }
    Json(json!({ "success": true, "data": [{ "id": "EMP-SHEET", "name": "From Sheet" }] }))
}

async fn fake_write(State(captured): State<Captured>, headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    captured.bodies.lock().unwrap().push((content_type, body));
    Json(json!({ "success": true, "message": "Saved to sheet" }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "script error")
}

/// 200 con una página HTML (p. ej. el login de la hoja)
async fn html_page() -> &'static str {
    "<html>oops"
}

/// JSON válido pero sin `success`
async fn missing_success() -> Json<Value> {
    Json(json!({ "data": [] }))
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/exec", addr)
}

async fn spawn_fake_remote(captured: Captured) -> String {
    spawn(
        Router::new()
            .route("/exec", route_get(fake_read).post(fake_write))
            .with_state(captured),
    )
    .await
}

fn sheets(url: String) -> Arc<dyn RemoteEndpoint> {
    Arc::new(SheetsClient::new(url, Duration::from_secs(2)).unwrap())
}

/// Dirección donde nadie escucha
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/exec", addr)
}

#[tokio::test]
async fn test_reads_go_through_get_with_query_string() {
    let captured = Captured::default();
    let url = spawn_fake_remote(captured.clone()).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade.salary(1, 2024).await;

    assert_eq!(dispatch.source, DataSource::Remote);
    assert!(dispatch.response.success);
    assert_eq!(dispatch.response.into_list()[0]["id"], "EMP-SHEET");

    let queries = captured.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["action"], "getSalary");
    assert_eq!(queries[0]["month"], "1");
    assert_eq!(queries[0]["year"], "2024");
}

#[tokio::test]
async fn test_writes_go_through_post_as_plain_text() {
    let captured = Captured::default();
    let url = spawn_fake_remote(captured.clone()).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade
        .create(Entity::Advances, &json!({ "employeeId": "EMP-1", "amount": 500 }))
        .await;

    assert_eq!(dispatch.source, DataSource::Remote);
    assert_eq!(dispatch.response.message.as_deref(), Some("Saved to sheet"));

    let bodies = captured.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].0.as_deref().unwrap().starts_with("text/plain"));
    let sent: Value = serde_json::from_str(&bodies[0].1).unwrap();
    assert_eq!(sent["action"], "addAdvance");
    assert_eq!(sent["data"]["amount"], 500);

    // Nada se escribió en local
    assert!(facade.local().read_list(Entity::Advances).await.is_empty());
}

#[tokio::test]
async fn test_remote_business_error_passes_through() {
    let captured = Captured::default();
    let url = spawn_fake_remote(captured.clone()).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade.list(Entity::Clients).await;

    assert_eq!(dispatch.source, DataSource::Remote);
    assert!(!dispatch.response.success);
    assert_eq!(dispatch.response.message.as_deref(), Some("Sheet locked"));
}

#[tokio::test]
async fn test_unknown_action_never_reaches_remote() {
    let captured = Captured::default();
    let url = spawn_fake_remote(captured.clone()).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade.execute("dropEverything", &json!({})).await;

    assert_eq!(dispatch.source, DataSource::Local);
    assert!(!dispatch.response.success);
    assert!(captured.queries.lock().unwrap().is_empty());
    assert!(captured.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_falls_back_to_local() {
    let url = spawn(Router::new().route("/exec", route_get(broken).post(broken))).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade
        .create(Entity::Employees, &json!({ "name": "Rahim", "status": "active" }))
        .await;
    assert_eq!(dispatch.source, DataSource::LocalFallback);
    assert!(dispatch.response.success);

    let dispatch = facade.list(Entity::Employees).await;
    assert_eq!(dispatch.source, DataSource::LocalFallback);
    let list = dispatch.response.into_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Rahim");
    assert!(!facade.loading().is_visible());
}

#[tokio::test]
async fn test_unreachable_remote_falls_back_through_router() {
    let url = closed_port_url().await;
    let app = create_test_app(Some(sheets(url)));

    let response = app
        .clone()
        .oneshot(post_plain(
            "/api",
            &json!({ "action": "addClient", "data": { "name": "Meghna Group", "phone": "01811111111" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.headers()["x-data-source"], "localFallback");
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post_plain(
            "/api",
            &json!({ "action": "deleteClient", "data": { "id": id } }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["message"], "Deleted successfully");

    let response = app.oneshot(get("/api?action=getClients")).await.unwrap();
    assert_eq!(response.headers()["x-data-source"], "localFallback");
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_system_reports_remote_storage() {
    let url = closed_port_url().await;
    let app = create_test_app(Some(sheets(url)));

    let response = app.oneshot(get("/api/system")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["storageType"], "Google Sheets");
}

#[tokio::test]
async fn test_html_body_with_ok_status_falls_back_to_local() {
    let url = spawn(Router::new().route("/exec", route_get(html_page).post(html_page))).await;
    let facade = ApiFacade::new(Some(sheets(url)), local_repository());

    let dispatch = facade
        .create(Entity::Clients, &json!({ "name": "Chittagong Port", "phone": "01711111111" }))
        .await;
    assert_eq!(dispatch.source, DataSource::LocalFallback);
    assert!(dispatch.response.success);

    let dispatch = facade.list(Entity::Clients).await;
    assert_eq!(dispatch.source, DataSource::LocalFallback);
    assert!(dispatch.response.success);
    assert_eq!(dispatch.response.into_list()[0]["name"], "Chittagong Port");
}

#[tokio::test]
async fn test_body_without_success_falls_back_to_local() {
    let url = spawn(Router::new().route("/exec", route_get(missing_success).post(missing_success))).await;
    let app = create_test_app(Some(sheets(url)));

    let response = app
        .clone()
        .oneshot(post_plain(
            "/api",
            &json!({ "action": "addEmployee", "data": { "name": "Rahim", "phone": "01712345678" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-data-source"], "localFallback");
    assert_eq!(body_json(response).await["success"], true);

    let response = app.oneshot(get("/api?action=getEmployees")).await.unwrap();
    assert_eq!(response.headers()["x-data-source"], "localFallback");
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["name"], "Rahim");
}

#[tokio::test]
async fn test_report_carries_remote_business_error() {
    let captured = Captured::default();
    let url = spawn_fake_remote(captured.clone()).await;
    let app = create_test_app(Some(sheets(url)));

    let response = app.oneshot(get("/api/vessel-orders/report")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Sheet locked");
    assert_eq!(captured.queries.lock().unwrap()[0]["action"], "getVesselOrders");
}
