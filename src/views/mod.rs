pub mod dashboard;
pub mod prototypes;
pub mod settings;
pub mod tester;

use askama::Template;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Prototypes
        .route("/prototype/new", get(prototypes::new_page))
        .route("/prototype/{id}", get(prototypes::show))
        .route("/prototype/{id}/edit", get(prototypes::edit_page))
        // API tester
        .route("/test", get(tester::index))
        // Settings
        .route("/settings", get(settings::index))
}

#[derive(Template)]
#[template(path = "error.html")]
#[allow(dead_code)]
pub(crate) struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// CSS badge class for an HTTP method.
pub(crate) fn method_class(method: &str) -> &'static str {
    match method {
        "GET" => "get",
        "POST" => "post",
        "PUT" => "put",
        "PATCH" => "patch",
        "DELETE" => "delete",
        _ => "other",
    }
}

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
