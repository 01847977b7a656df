use crate::api::handlers::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(super::handlers::health_check))
        .route("/health", get(super::handlers::health_check))
}

pub fn mcp_routes() -> Router<AppState> {
    Router::new().route(
        "/mcp",
        post(super::handlers::mcp_post).get(super::handlers::mcp_get),
    )
}
