use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use leadwire_mcp::{
    api::{self, handlers::AppState},
    config::UpstreamConfig,
    mcp::McpService,
    upstream::LeadWireClient,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build the gateway router against the given (mock) upstream base URL
/// (no HTTP listener, requests go through tower::oneshot).
pub fn build_test_app(upstream_base_url: &str) -> Router {
    let upstream = UpstreamConfig {
        base_url: upstream_base_url.to_string(),
        api_key: "lw-test-key".to_string(),
        timeout_secs: 5,
    };

    let client = LeadWireClient::new(&upstream).unwrap();
    let state = AppState {
        service: Arc::new(McpService::new(client)),
    };

    api::build_router(state)
}

/// POST a JSON-RPC envelope to /mcp and return (status, parsed body).
pub async fn rpc(app: Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let json = response_json(response).await;
    (status, json)
}

/// Helper to extract JSON from a response body.
pub async fn response_json(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
