//! REST API endpoints for the pettrack-service.
//!
//! Every handler performs exactly one store operation. The store serializes
//! its writers internally, so handlers never take an outer lock.
//!
//! ## Input coercion
//!
//! Trackers are small embedded clients and do not always send well-typed JSON.
//! Coordinates, battery and radius are accepted as JSON numbers or numeric
//! strings; anything else counts as missing.
//!
//! ## Error Handling
//!
//! All endpoints return structured JSON errors via [`AppError`]. Store errors
//! return HTTP 500; missing coordinates return HTTP 400.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use pettrack_store::{DEFAULT_BATTERY, DEFAULT_HISTORY_LIMIT, Fix, Geofence, NewFix, NewGeofence};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::state::AppState;

/// Coordinates reported by `/api/location/latest` before any fix exists.
pub const DEMO_LATITUDE: f64 = -6.2088;
pub const DEMO_LONGITUDE: f64 = 106.8456;
pub const DEMO_DEVICE_ID: &str = "demo";

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        // Locations
        .route("/api/location", post(record_location))
        .route("/api/location/latest", get(latest_location))
        .route("/api/location/history", get(location_history))
        // Geofences
        .route("/api/geofence", get(list_geofences).post(create_geofence))
}

/// Service index response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Service status and endpoint listing.
async fn index() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("POST /api/location", "Submit a GPS fix"),
        ("GET /api/location/latest", "Latest GPS fix"),
        ("GET /api/location/history", "Recent GPS fixes (?limit=N, default 50)"),
        ("GET /api/geofence", "List geofences"),
        ("POST /api/geofence", "Create a geofence"),
        ("GET /api/health", "Service health and record counts"),
    ]);

    Json(IndexResponse {
        status: "OK",
        message: "Pet tracker API is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Number of stored fixes.
    pub locations: usize,
    /// Number of stored geofences.
    pub geofences: usize,
}

/// Health check endpoint.
///
/// Loads the snapshot, so an unreadable store reports as a server error.
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, AppError> {
    let snapshot = state.store.snapshot()?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc(),
        locations: snapshot.locations.len(),
        geofences: snapshot.geofences.len(),
    }))
}

// ==========================================================================
// Locations
// ==========================================================================

/// Body of `POST /api/location`.
#[derive(Debug, Default, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub battery: Option<Value>,
    #[serde(default)]
    pub device_id: Option<Value>,
}

/// Response to an accepted fix.
#[derive(Debug, Serialize)]
pub struct RecordLocationResponse {
    pub success: bool,
    pub id: i64,
    pub message: &'static str,
}

/// Accept a GPS fix from a tracker.
///
/// # Errors
///
/// - Returns [`AppError::BadRequest`] if `lat` or `lng` is missing or not numeric
/// - Returns [`AppError::Store`] if the snapshot cannot be written
async fn record_location(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LocationRequest>,
) -> Result<Json<RecordLocationResponse>, AppError> {
    let lat = body.lat.as_ref().and_then(coerce_number);
    let lng = body.lng.as_ref().and_then(coerce_number);
    let (Some(latitude), Some(longitude)) = (lat, lng) else {
        warn!("Rejected location without usable lat/lng: {:?}", body);
        return Err(AppError::BadRequest("lat and lng are required".to_string()));
    };

    let fix = state.store.record_fix(NewFix {
        latitude,
        longitude,
        device_id: body.device_id.as_ref().and_then(coerce_text),
        battery: body.battery.as_ref().and_then(coerce_number),
    })?;

    info!(
        "Location received from {}: {}, {}",
        fix.device_id, fix.latitude, fix.longitude
    );

    Ok(Json(RecordLocationResponse {
        success: true,
        id: fix.id,
        message: "Location saved",
    }))
}

/// Stand-in reported by `/api/location/latest` while the history is empty.
#[derive(Debug, Serialize)]
pub struct PlaceholderFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(serialize_with = "pettrack_store::number::serialize")]
    pub battery: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub device_id: &'static str,
    pub message: &'static str,
}

impl PlaceholderFix {
    fn now() -> Self {
        Self {
            latitude: DEMO_LATITUDE,
            longitude: DEMO_LONGITUDE,
            battery: DEFAULT_BATTERY,
            timestamp: OffsetDateTime::now_utc(),
            device_id: DEMO_DEVICE_ID,
            message: "No location data yet",
        }
    }
}

/// Latest fix, or a placeholder when nothing has been recorded.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LatestResponse {
    Fix(Fix),
    Placeholder(PlaceholderFix),
}

/// Get the most recent fix.
async fn latest_location(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LatestResponse>, AppError> {
    let latest = match state.store.latest_fix()? {
        Some(fix) => LatestResponse::Fix(fix),
        None => LatestResponse::Placeholder(PlaceholderFix::now()),
    };
    Ok(Json(latest))
}

/// Query parameters for the history endpoint.
///
/// `limit` is kept as text so that garbage falls back to the default instead
/// of failing extraction.
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<String>,
}

impl HistoryQuery {
    /// Requested limit, or the default when absent or without leading digits.
    ///
    /// Only the leading integer counts, so `5.7` and `10abc` read as 5 and 10.
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(leading_integer)
            .unwrap_or(DEFAULT_HISTORY_LIMIT as i64)
    }
}

/// Parse the signed integer prefix of `text`, saturating on overflow.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Get recent fixes, newest first.
///
/// # Query Parameters
///
/// - `limit`: Maximum number of fixes; non-positive or non-numeric values
///   fall back to 50
async fn location_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<Fix>>, AppError> {
    let fixes = state.store.fix_history(params.limit())?;
    Ok(Json(fixes))
}

// ==========================================================================
// Geofences
// ==========================================================================

/// List all geofences in creation order.
async fn list_geofences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Geofence>>, AppError> {
    Ok(Json(state.store.list_geofences()?))
}

/// Body of `POST /api/geofence`.
#[derive(Debug, Default, Deserialize)]
pub struct GeofenceRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
    #[serde(default)]
    pub radius: Option<Value>,
}

/// Response to a created geofence.
#[derive(Debug, Serialize)]
pub struct CreateGeofenceResponse {
    pub success: bool,
    pub id: i64,
}

/// Create a geofence.
///
/// The name is stored as given (possibly empty); coordinates must be numeric.
async fn create_geofence(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GeofenceRequest>,
) -> Result<Json<CreateGeofenceResponse>, AppError> {
    let lat = body.latitude.as_ref().and_then(coerce_number);
    let lng = body.longitude.as_ref().and_then(coerce_number);
    let (Some(latitude), Some(longitude)) = (lat, lng) else {
        warn!("Rejected geofence without usable coordinates: {:?}", body);
        return Err(AppError::BadRequest(
            "latitude and longitude are required".to_string(),
        ));
    };

    let geofence = state.store.record_geofence(NewGeofence {
        name: body.name.as_ref().and_then(coerce_text).unwrap_or_default(),
        latitude,
        longitude,
        radius: body.radius.as_ref().and_then(coerce_number),
    })?;

    info!(
        "Geofence '{}' created at {}, {} (r={}m)",
        geofence.name, geofence.latitude, geofence.longitude, geofence.radius
    );

    Ok(Json(CreateGeofenceResponse {
        success: true,
        id: geofence.id,
    }))
}

/// Read a finite number from a JSON number or numeric string.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Read text from a JSON string, or render a number as text.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Store(pettrack_store::Error),
}

impl From<pettrack_store::Error> for AppError {
    fn from(e: pettrack_store::Error) -> Self {
        AppError::Store(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Store(e) => {
                error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use pettrack_store::{DEFAULT_DEVICE_ID, DEFAULT_RADIUS, MAX_FIXES, Store};
    use tower::ServiceExt;

    use crate::config::Config;

    fn create_test_state() -> Arc<AppState> {
        let store = Store::open_in_memory().unwrap();
        AppState::new(store, Config::default())
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_json(state: &Arc<AppState>, uri: &str) -> axum::response::Response {
        router()
            .with_state(Arc::clone(state))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(state: &Arc<AppState>, uri: &str, body: Value) -> axum::response::Response {
        router()
            .with_state(Arc::clone(state))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let state = create_test_state();
        let response = get_json(&state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "OK");
        assert!(json["endpoints"]["POST /api/location"].is_string());
        assert!(json["endpoints"]["GET /api/geofence"].is_string());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = create_test_state();
        state.store.record_fix(NewFix::new(1.0, 2.0)).unwrap();

        let response = get_json(&state, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
        assert!(json["timestamp"].is_string());
        assert_eq!(json["locations"], 1);
        assert_eq!(json["geofences"], 0);
    }

    #[tokio::test]
    async fn test_record_location() {
        let state = create_test_state();

        let response = post_json(
            &state,
            "/api/location",
            serde_json::json!({ "lat": -6.2, "lng": 106.8, "battery": 77, "device_id": "collar-1" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Location saved");

        let stored = state.store.latest_fix().unwrap().unwrap();
        assert_eq!(json["id"], stored.id);
        assert_eq!(stored.latitude, -6.2);
        assert_eq!(stored.longitude, 106.8);
        assert_eq!(stored.battery, 77.0);
        assert_eq!(stored.device_id, "collar-1");
    }

    #[tokio::test]
    async fn test_record_location_defaults() {
        let state = create_test_state();

        let response = post_json(&state, "/api/location", serde_json::json!({ "lat": 1, "lng": 2 })).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = state.store.latest_fix().unwrap().unwrap();
        assert_eq!(stored.battery, DEFAULT_BATTERY);
        assert_eq!(stored.device_id, DEFAULT_DEVICE_ID);
    }

    #[tokio::test]
    async fn test_record_location_coerces_strings() {
        let state = create_test_state();

        let body = serde_json::json!({ "lat": "-6.5", "lng": " 106.25 ", "battery": "55", "device_id": 42 });
        let response = post_json(&state, "/api/location", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = state.store.latest_fix().unwrap().unwrap();
        assert_eq!(stored.latitude, -6.5);
        assert_eq!(stored.longitude, 106.25);
        assert_eq!(stored.battery, 55.0);
        assert_eq!(stored.device_id, "42");
    }

    #[tokio::test]
    async fn test_record_location_accepts_zero_coordinates() {
        let state = create_test_state();

        let response = post_json(&state, "/api/location", serde_json::json!({ "lat": 0, "lng": 0 })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.store.latest_fix().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_record_location_missing_coordinates() {
        let state = create_test_state();

        for body in [
            serde_json::json!({ "lng": 2 }),
            serde_json::json!({ "lat": 1 }),
            serde_json::json!({ "lat": null, "lng": 2 }),
            serde_json::json!({ "lat": "north", "lng": 2 }),
            serde_json::json!({}),
        ] {
            let response = post_json(&state, "/api/location", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = response_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("lat and lng"));
        }

        // Nothing reached the store
        assert!(state.store.latest_fix().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let state = create_test_state();

        let response = router()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/location")
                    .header("content-type", "application/json")
                    .body(Body::from("{ invalid json }"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_latest_location_placeholder() {
        let state = create_test_state();

        let response = get_json(&state, "/api/location/latest").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["latitude"], DEMO_LATITUDE);
        assert_eq!(json["longitude"], DEMO_LONGITUDE);
        assert_eq!(json["device_id"], DEMO_DEVICE_ID);
        assert_eq!(json["battery"], 100.0);
        assert!(json["battery"].is_i64());
        assert!(json["timestamp"].is_string());
        assert!(json["message"].is_string());
        assert!(json.get("id").is_none());
    }

    #[tokio::test]
    async fn test_latest_location_returns_newest() {
        let state = create_test_state();
        state.store.record_fix(NewFix::new(1.0, 1.0)).unwrap();
        let newest = state.store.record_fix(NewFix::new(2.0, 2.0)).unwrap();

        let json = response_json(get_json(&state, "/api/location/latest").await).await;
        assert_eq!(json["id"], newest.id);
        assert_eq!(json["latitude"], 2.0);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_location_history_empty() {
        let state = create_test_state();

        let response = get_json(&state, "/api/location/history").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_location_history_limits() {
        let state = create_test_state();
        for i in 0..60 {
            state.store.record_fix(NewFix::new(i as f64, 0.0)).unwrap();
        }

        let cases = [
            ("/api/location/history", 50),
            ("/api/location/history?limit=5", 5),
            ("/api/location/history?limit=500", 60),
            ("/api/location/history?limit=0", 50),
            ("/api/location/history?limit=-5", 50),
            ("/api/location/history?limit=abc", 50),
            ("/api/location/history?limit=", 50),
            ("/api/location/history?limit=5.7", 5),
            ("/api/location/history?limit=10abc", 10),
            ("/api/location/history?limit=99999999999999999999", 60),
        ];

        for (uri, expected) in cases {
            let json = response_json(get_json(&state, uri).await).await;
            assert_eq!(json.as_array().unwrap().len(), expected, "{}", uri);
        }

        // Newest first
        let json = response_json(get_json(&state, "/api/location/history?limit=2").await).await;
        assert_eq!(json[0]["latitude"], 59.0);
        assert_eq!(json[1]["latitude"], 58.0);
    }

    #[tokio::test]
    async fn test_location_history_capped_at_capacity() {
        let state = create_test_state();
        for i in 0..=MAX_FIXES {
            state.store.record_fix(NewFix::new(i as f64, 0.0)).unwrap();
        }

        let json = response_json(get_json(&state, "/api/location/history?limit=5000").await).await;
        assert_eq!(json.as_array().unwrap().len(), MAX_FIXES);
    }

    #[tokio::test]
    async fn test_create_and_list_geofences() {
        let state = create_test_state();

        let response = post_json(
            &state,
            "/api/geofence",
            serde_json::json!({ "name": "yard", "latitude": 1, "longitude": 2 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let created = response_json(response).await;
        assert_eq!(created["success"], true);

        post_json(
            &state,
            "/api/geofence",
            serde_json::json!({ "name": "park", "latitude": "3.5", "longitude": 4, "radius": 250 }),
        )
        .await;

        let json = response_json(get_json(&state, "/api/geofence").await).await;
        let fences = json.as_array().unwrap();
        assert_eq!(fences.len(), 2);

        assert_eq!(fences[0]["id"], created["id"]);
        assert_eq!(fences[0]["name"], "yard");
        assert_eq!(fences[0]["radius"], DEFAULT_RADIUS);
        assert!(!fences[0]["created_at"].as_str().unwrap().is_empty());

        assert_eq!(fences[1]["name"], "park");
        assert_eq!(fences[1]["latitude"], 3.5);
        assert_eq!(fences[1]["radius"], 250.0);
    }

    #[tokio::test]
    async fn test_create_geofence_without_name() {
        let state = create_test_state();

        let response = post_json(
            &state,
            "/api/geofence",
            serde_json::json!({ "latitude": 1, "longitude": 2 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.list_geofences().unwrap()[0].name, "");
    }

    #[tokio::test]
    async fn test_create_geofence_missing_coordinates() {
        let state = create_test_state();

        let response = post_json(&state, "/api/geofence", serde_json::json!({ "name": "yard" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.list_geofences().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.json");
        let store = Store::open(&path).unwrap();
        let state = AppState::new(store, Config::default());

        std::fs::remove_file(&path).unwrap();

        let response = get_json(&state, "/api/geofence").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert!(json["error"].is_string());

        let response = post_json(&state, "/api/location", serde_json::json!({ "lat": 1, "lng": 2 })).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_concurrent_location_posts() {
        let state = create_test_state();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    post_json(&state, "/api/location", serde_json::json!({ "lat": i, "lng": i })).await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().status(), StatusCode::OK);
        }

        assert_eq!(state.store.fix_history(100).unwrap().len(), 10);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&serde_json::json!(1.5)), Some(1.5));
        assert_eq!(coerce_number(&serde_json::json!(-3)), Some(-3.0));
        assert_eq!(coerce_number(&serde_json::json!("2.25")), Some(2.25));
        assert_eq!(coerce_number(&serde_json::json!("NaN")), None);
        assert_eq!(coerce_number(&serde_json::json!("abc")), None);
        assert_eq!(coerce_number(&serde_json::json!(true)), None);
        assert_eq!(coerce_number(&serde_json::json!([1])), None);
    }

    #[test]
    fn test_history_query_limit() {
        let query = |limit: Option<&str>| HistoryQuery {
            limit: limit.map(str::to_string),
        };

        assert_eq!(query(None).limit(), 50);
        assert_eq!(query(Some("10")).limit(), 10);
        assert_eq!(query(Some("-5")).limit(), -5);
        assert_eq!(query(Some("ten")).limit(), 50);
        assert_eq!(query(Some("")).limit(), 50);
        assert_eq!(query(Some("-")).limit(), 50);
    }

    #[test]
    fn test_history_query_limit_uses_leading_digits() {
        let query = |limit: &str| HistoryQuery {
            limit: Some(limit.to_string()),
        };

        assert_eq!(query("5.7").limit(), 5);
        assert_eq!(query("10abc").limit(), 10);
        assert_eq!(query("  7 ").limit(), 7);
        assert_eq!(query("+3").limit(), 3);
        assert_eq!(query("-2.5").limit(), -2);
        assert_eq!(query(".5").limit(), 50);
        assert_eq!(query("99999999999999999999999").limit(), i64::MAX);
        assert_eq!(query("-99999999999999999999999").limit(), -i64::MAX);
    }

    #[test]
    fn test_app_error_bad_request() {
        let response = AppError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_app_error_store() {
        let error = pettrack_store::Error::LockPoisoned;
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
