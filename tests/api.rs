//! In-process tests of the catalog API surface.
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rusqlite::{params, Connection};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use trackside::db::{RacesRepo, SqliteCatalog};
use trackside::rest::router;

fn setup() -> (TempDir, SqliteCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = SqliteCatalog::new(dir.path().join("catalog.db"));
    // Any read migrates the schema, leaving an empty catalog to arrange.
    assert!(RacesRepo::list(&catalog, None, "").unwrap().is_empty());
    (dir, catalog)
}

fn conn(catalog: &SqliteCatalog) -> Connection {
    Connection::open(&catalog.path).unwrap()
}

fn app(catalog: &SqliteCatalog) -> Router {
    router(catalog.clone(), catalog.clone())
}

fn insert_race(catalog: &SqliteCatalog, id: i64, visible: bool, offset_secs: i64) {
    let start = Utc::now() + Duration::seconds(offset_secs);
    conn(catalog)
        .execute(
            "INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, 1i64, format!("Race {id}"), id, visible, start.to_rfc3339()],
        )
        .unwrap();
}

fn insert_event(catalog: &SqliteCatalog, id: i64, name: &str, location: &str, sport: &str) {
    let start = Utc::now() + Duration::hours(2);
    conn(catalog)
        .execute(
            "INSERT INTO events (id, name, location, sport, advertised_start_time)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, location, sport, start.to_rfc3339()],
        )
        .unwrap();
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn list_races_without_filter_returns_every_row() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 1, true, 60);
    insert_race(&catalog, 2, false, 60);
    insert_race(&catalog, 3, true, 60);

    let (status, body) = post_json(app(&catalog), "/v1/list-races", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["races"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_races_visible_filter_returns_only_visible() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 1, true, 60);
    insert_race(&catalog, 2, false, 60);
    insert_race(&catalog, 3, true, 60);

    let (status, body) = post_json(
        app(&catalog),
        "/v1/list-races",
        json!({ "filter": { "visible": true } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let races = body["races"].as_array().unwrap();
    assert_eq!(races.len(), 2);
    assert!(races.iter().all(|r| r["visible"] == json!(true)));
}

#[tokio::test]
async fn list_races_orders_by_advertised_start_time() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 1, true, 600);
    insert_race(&catalog, 2, true, -600);
    insert_race(&catalog, 3, true, 6000);

    let (status, body) = post_json(
        app(&catalog),
        "/v1/list-races",
        json!({ "order_by": "advertised_start_time" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let seconds: Vec<i64> = body["races"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["advertised_start_time"]["seconds"].as_i64().unwrap())
        .collect();
    let mut sorted = seconds.clone();
    sorted.sort_unstable();
    assert_eq!(seconds, sorted);
}

#[tokio::test]
async fn list_races_bogus_order_column_is_internal_error() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 1, true, 60);

    let (status, _body) = post_json(
        app(&catalog),
        "/v1/list-races",
        json!({ "order_by": "no_such_column" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn get_race_returns_requested_id() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 7, true, -3600);

    let (status, body) = get_json(app(&catalog), "/v1/races/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race"]["id"], json!(7));
    assert_eq!(body["race"]["status"], json!("CLOSED"));
}

#[tokio::test]
async fn get_race_unknown_id_is_not_found() {
    let (_dir, catalog) = setup();
    insert_race(&catalog, 1, true, 60);

    let (status, body) = get_json(app(&catalog), "/v1/races/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Race not found"));
}

#[tokio::test]
async fn list_events_triple_filter_pins_single_event() {
    let (_dir, catalog) = setup();
    insert_event(&catalog, 1, "Mock Event 1", "Brisbane", "Bear Fighting");
    insert_event(&catalog, 2, "Mock Event 2", "Brisbane", "Darts");
    insert_event(&catalog, 3, "Mock Event 3", "Sydney", "Bear Fighting");

    let (status, body) = post_json(
        app(&catalog),
        "/v1/list-events",
        json!({
            "filter": {
                "name": "Mock Event 1",
                "location": "Brisbane",
                "sport": "Bear Fighting"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], json!("Mock Event 1"));
    // A start two hours out must still read as OPEN.
    assert_eq!(events[0]["status"], json!("OPEN"));
}

#[tokio::test]
async fn get_event_unknown_id_returns_zero_value_event() {
    let (_dir, catalog) = setup();
    insert_event(&catalog, 1, "Mock Event 1", "Brisbane", "Bear Fighting");

    let (status, body) = get_json(app(&catalog), "/v1/events/999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["id"], json!(0));
    assert_eq!(body["event"]["name"], json!(""));
    assert_eq!(body["event"]["status"], json!(""));
}

#[tokio::test]
async fn seeded_catalog_serves_visible_races() {
    let (_dir, catalog) = setup();
    catalog.init(100).unwrap();

    let (status, body) = post_json(
        app(&catalog),
        "/v1/list-races",
        json!({ "filter": { "visible": true } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let races = body["races"].as_array().unwrap();
    assert!(!races.is_empty());
    assert!(races.iter().all(|r| r["visible"] == json!(true)));
}

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, catalog) = setup();

    let (status, body) = get_json(app(&catalog), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
