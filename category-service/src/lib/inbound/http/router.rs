use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_category::create_category;
use super::handlers::delete_category::delete_category;
use super::handlers::get_category::get_category;
use super::handlers::get_current_user::get_current_user;
use super::handlers::list_categories::list_categories;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_category::update_category;
use super::middleware::require_auth;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub public_paths: Arc<Vec<String>>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    category_service: Arc<dyn CategoryServicePort>,
    authenticator: Arc<Authenticator>,
    public_paths: Vec<String>,
) -> Router {
    let state = AppState {
        user_service,
        category_service,
        authenticator,
        public_paths: Arc::new(public_paths),
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // A single auth layer guards the whole surface; the middleware passes
    // allow-listed paths through untouched. Unmatched paths are gated too,
    // so probing for routes without a token yields a 401 rather than a 404.
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users/me", get(get_current_user))
        .route("/api/categories", post(create_category))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:category_id", get(get_category))
        .route("/api/categories/:category_id", patch(update_category))
        .route("/api/categories/:category_id", delete(delete_category))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
