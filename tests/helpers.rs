// Shared test helpers: a local mock of the airport admin backend.
//
// Tests bind an ephemeral axum server on 127.0.0.1 and point the real client
// at it, so the full request path (URL joining, query encoding, headers,
// multipart bodies, error mapping) is exercised without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

/// Token the mock flights endpoint accepts.
#[allow(dead_code)]
pub const VALID_TOKEN: &str = "secret-token";

/// Everything the mock backend saw, for assertions on the wire format.
#[derive(Debug, Default)]
pub struct Recorded {
    /// Query parameters of each flight search request.
    pub flight_queries: Vec<HashMap<String, String>>,
    /// Authorization header of each flight search request.
    pub flight_auth_headers: Vec<Option<String>>,
    /// Multipart fields of each import trigger request.
    pub import_fields: Vec<HashMap<String, String>>,
    /// Number of airport list fetches.
    pub airport_list_requests: usize,
    /// Number of airport detail fetches.
    pub airport_detail_requests: usize,
}

type Shared = Arc<Mutex<Recorded>>;

/// A running mock backend.
pub struct MockBackend {
    /// Base URL to hand to `ApiClient::new`.
    pub base_url: Url,
    /// Requests the backend has seen so far.
    pub recorded: Shared,
}

/// Starts the mock backend on an ephemeral port.
#[allow(dead_code)]
pub async fn start_backend() -> MockBackend {
    let recorded: Shared = Arc::new(Mutex::new(Recorded::default()));

    let app = Router::new()
        .route("/api/airports/", get(list_airports))
        .route("/api/airports/import/", post(trigger_import))
        .route("/api/airports/:iata/", get(get_airport))
        .route("/api/import-logs/", get(list_import_logs))
        .route("/api/import-logs/:id/", get(get_import_log))
        .route("/api/flights_integration/search/", get(search_flights))
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let base_url = Url::parse(&format!("http://{addr}/api/")).expect("Failed to parse base URL");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    // Give the server time to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    MockBackend { base_url, recorded }
}

fn airport_json(iata: &str, city: &str, with_coordinates: bool) -> serde_json::Value {
    if with_coordinates {
        json!({"iata": iata, "city": city, "state": "SP", "lat": -23.4356, "lon": -46.4731})
    } else {
        json!({"iata": iata, "city": city, "state": "SP", "lat": null, "lon": null})
    }
}

async fn list_airports(State(recorded): State<Shared>) -> Json<serde_json::Value> {
    recorded.lock().unwrap().airport_list_requests += 1;
    Json(json!([
        airport_json("GRU", "Guarulhos", true),
        airport_json("VCP", "Campinas", false),
        airport_json("JFK", "New York", true),
    ]))
}

async fn get_airport(State(recorded): State<Shared>, Path(iata): Path<String>) -> impl IntoResponse {
    recorded.lock().unwrap().airport_detail_requests += 1;
    if iata == "GRU" {
        (
            StatusCode::OK,
            Json(airport_json("GRU", "Guarulhos", true)),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
    }
}

async fn trigger_import(State(recorded): State<Shared>, mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.expect("Bad multipart body") {
        let name = field.name().expect("Unnamed field").to_string();
        let value = field.text().await.expect("Unreadable field");
        fields.insert(name, value);
    }
    let rejected = fields.get("password").map(String::as_str) == Some("wrong");
    recorded.lock().unwrap().import_fields.push(fields);

    if rejected {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "bad credentials"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "status": "SUCCESS",
            "created": 2,
            "updated": 5,
            "created_iatas": ["GRU", "VCP"],
            "updated_iatas": ["JFK", "CGH", "SDU", "BSB", "POA"],
            "details": "Successfully processed 7 airports."
        })),
    )
}

fn log_json(id: i64, status: &str, terminal: bool) -> serde_json::Value {
    let end_time = terminal.then(|| json!("2024-01-10T12:05:00Z"));
    let created: Vec<&str> = terminal.then(|| vec!["GRU", "VCP"]).unwrap_or_default();
    let updated: Vec<&str> = terminal.then(|| vec!["JFK"]).unwrap_or_default();
    json!({
        "id": id,
        "status": status,
        "start_time": "2024-01-10T12:00:00Z",
        "end_time": end_time,
        "airports_created": created.len(),
        "airports_updated": updated.len(),
        "created_iatas": created,
        "updated_iatas": updated,
        "error_message": null
    })
}

async fn list_import_logs() -> Json<serde_json::Value> {
    Json(json!([
        log_json(9, "RUNNING", false),
        log_json(8, "ARCHIVED", true),
        log_json(7, "SUCCESS", true),
    ]))
}

async fn get_import_log(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 7 {
        (StatusCode::OK, Json(log_json(7, "SUCCESS", true)))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
    }
}

async fn search_flights(
    State(recorded): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let round_trip = params.contains_key("returnDate");
    {
        let mut recorded = recorded.lock().unwrap();
        recorded.flight_queries.push(params);
        recorded.flight_auth_headers.push(auth.clone());
    }

    let expected = format!("Token {VALID_TOKEN}");
    if auth.as_deref() != Some(expected.as_str()) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"})));
    }

    let outbound = json!({
        "aircraft": {"manufacturer": "Boeing", "model": "737-800"},
        "departure_time": "2024-01-10T08:00:00Z",
        "arrival_time": "2024-01-10T17:30:00Z"
    });
    let inbound = json!({
        "aircraft": {"manufacturer": "Airbus", "model": "A320"},
        "departure_time": "2024-01-20T10:00:00Z",
        "arrival_time": "2024-01-20T19:30:00Z"
    });
    let inbound = round_trip.then_some(inbound);
    let combination = json!({
        "price": {"currency": "BRL", "total": 512.4},
        "outbound_flight": outbound,
        "inbound_flight": inbound
    });
    (
        StatusCode::OK,
        Json(json!({"combinations": [combination]})),
    )
}
