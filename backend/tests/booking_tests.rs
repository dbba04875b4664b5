//! Booking endpoint integration tests
//!
//! Covers the mock action contract: any JSON object is confirmed with a
//! `BOOK-` reference, anything else is the fixed 500 diagnostic.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use proptest::prelude::*;
use tower::ServiceExt;

use skyharvest_backend::config::{Config, GatewayConfig, ServerConfig};
use skyharvest_backend::services::{ForecastService, MockActionGateway};
use skyharvest_backend::{create_app, AppState};

fn test_app() -> axum::Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        gateway: GatewayConfig {
            action_delay_ms: 0,
            forecast_delay_ms: 0,
        },
    };
    let state = AppState {
        config: Arc::new(config),
        gateway: Arc::new(MockActionGateway::instant()),
        forecast: ForecastService::instant(),
    };
    create_app(state)
}

fn post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn submit(body: impl Into<String>) -> (StatusCode, serde_json::Value) {
    let response = test_app().oneshot(post("/book-agent", body)).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Assert a reference like `BOOK-1234`: literal prefix, numeric suffix
/// below 10000
fn assert_booking_reference(value: &serde_json::Value) {
    let reference = value.as_str().expect("bookingId must be a string");
    let suffix = reference
        .strip_prefix("BOOK-")
        .expect("bookingId must carry the BOOK- prefix");
    let n: u32 = suffix.parse().expect("suffix must be numeric");
    assert!(n < 10_000);
}

#[tokio::test]
async fn booking_payload_is_confirmed() {
    let (status, body) = submit(
        r#"{"agentId":"john","agentName":"John Smith","date":"2024-04-20T09:00:00Z","region":"Northern Region"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Agent booked successfully");
    assert_booking_reference(&body["bookingId"]);
}

#[tokio::test]
async fn malformed_body_is_a_fixed_500() {
    let (status, body) = submit("definitely not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to book agent");
}

#[tokio::test]
async fn non_object_json_is_rejected() {
    for payload in ["[1,2,3]", "42", "\"text\"", "true", "null"] {
        let (status, body) = submit(payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}

// ============================================================================
// Property: every JSON object is confirmed
// ============================================================================

fn json_scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        "[a-zA-Z0-9 ]{0,20}".prop_map(serde_json::Value::from),
    ]
}

fn json_object() -> impl Strategy<Value = serde_json::Value> {
    prop::collection::hash_map("[a-zA-Z][a-zA-Z0-9]{0,12}", json_scalar(), 0..6)
        .prop_map(|fields| serde_json::Value::Object(fields.into_iter().collect()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_object_payload_is_confirmed(payload in json_object()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let (status, body) = submit(payload.to_string()).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
            assert_booking_reference(&body["bookingId"]);
        });
    }
}
