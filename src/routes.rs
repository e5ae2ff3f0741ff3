//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check (public)
//! - `/api/*`                    - REST API (reads public, mutations need a token)
//! - `GET  /login`               - Dashboard login page
//! - `GET  /`, `/{storeId}/*`    - Dashboard (cookie session required)
//! - `/static/*`                 - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token or cookie ([`crate::api::middleware::session`])
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(rate_limited(state.clone(), behind_proxy))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn rate_limited(state: AppState, behind_proxy: bool) -> Router<AppState> {
    base_routes(state).layer(rate_limit::layer(behind_proxy))
}

/// API and dashboard routes without rate limiting, path normalization or
/// static files.
///
/// The rate limiter keys on the peer address, which in-process test clients
/// do not provide, so integration tests drive this router directly.
pub fn base_routes(state: AppState) -> Router<AppState> {
    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state, web_auth::layer));

    Router::new()
        .nest("/api", api::routes::routes())
        .merge(web::routes::public_routes())
        .merge(web_protected)
}
