pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod upstream;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    // One shared client for the proxy and the typed upstream calls.
    // Redirects are relayed to the browser, never followed here.
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client");

    let state: SharedState = Arc::new(AppState { config, http });

    // Security headers on the rendered pages only; proxied responses are
    // relayed untouched.
    let pages = views::view_routes()
        .nest_service("/static", ServeDir::new("static"))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Router::new()
        .merge(routes::proxy_routes())
        .merge(pages)
        .route("/health", axum::routing::get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
