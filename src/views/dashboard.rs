use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::models::Prototype;
use crate::state::SharedState;
use crate::upstream;
use crate::views::{format_timestamp, method_class};

#[derive(Template)]
#[template(path = "dashboard/index.html")]
#[allow(dead_code)]
struct DashboardTemplate {
    error: Option<String>,
    search: String,
    method_filter: String,
    status_filter: String,
    rows: Vec<PrototypeRow>,
    total: usize,
    published: usize,
    drafts: usize,
    this_week: usize,
}

#[allow(dead_code)]
struct PrototypeRow {
    id: String,
    name: String,
    method: String,
    method_class: &'static str,
    url_path: String,
    updated_at: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

pub async fn index(
    State(state): State<SharedState>,
    Query(filter): Query<ListQuery>,
) -> impl IntoResponse {
    let (prototypes, error) = match upstream::prototypes::list(&state).await {
        Ok(list) => (list, None),
        Err(e) => {
            tracing::warn!("Failed to load prototypes: {e}");
            (Vec::new(), Some(format!("Failed to load: {e}")))
        }
    };

    let search = filter.q.unwrap_or_default();
    let method_filter = normalize_filter(filter.method);
    let status_filter = normalize_filter(filter.status);

    let total = prototypes.len();
    // The backend does not report a draft state yet; everything it returns
    // is treated as published.
    let published = total;
    let drafts = 0;
    let week_ago = Utc::now() - Duration::days(7);
    let this_week = prototypes
        .iter()
        .filter(|p| p.updated_at > week_ago)
        .count();

    let needle = search.to_lowercase();
    let rows = prototypes
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| method_filter == "all" || p.request.method == method_filter)
        .filter(|_| status_filter == "all" || status_filter == "published")
        .map(|p| PrototypeRow {
            id: p.id.clone(),
            name: if p.name.is_empty() {
                "Untitled".to_string()
            } else {
                p.name.clone()
            },
            method: p.request.method.clone(),
            method_class: method_class(&p.request.method),
            url_path: p.request.url_path.clone(),
            updated_at: format_timestamp(&p.updated_at),
        })
        .collect();

    let template = DashboardTemplate {
        error,
        search,
        method_filter,
        status_filter,
        rows,
        total,
        published,
        drafts,
        this_week,
    };
    Html(template.render().unwrap_or_default())
}

fn normalize_filter(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "all".to_string(),
    }
}

fn matches_search(proto: &Prototype, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    proto.name.to_lowercase().contains(needle)
        || proto.request.url_path.to_lowercase().contains(needle)
}
