use std::collections::BTreeMap;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::{AppError, UpstreamError};
use crate::models::Prototype;
use crate::state::SharedState;
use crate::upstream;
use crate::views::{ErrorTemplate, format_timestamp, method_class};

#[derive(Template)]
#[template(path = "prototypes/show.html")]
#[allow(dead_code)]
struct ShowTemplate {
    id: String,
    name: String,
    method: String,
    method_class: &'static str,
    url_path: String,
    mock_url: String,
    created_at: String,
    updated_at: String,
    delay: String,
    headers: Vec<(String, String)>,
    path_params: Vec<(String, String)>,
    body_schema: Option<String>,
    response_status: String,
    response_body: Option<String>,
}

#[derive(Template)]
#[template(path = "prototypes/new.html")]
struct NewTemplate;

#[derive(Template)]
#[template(path = "prototypes/edit.html")]
#[allow(dead_code)]
struct EditTemplate {
    id: String,
    name: String,
    method: String,
    url_path: String,
    delay: String,
    headers: Vec<(String, String)>,
    path_params: Vec<(String, String)>,
    body_schema: String,
    response_status: String,
    response_body: String,
}

pub async fn show(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let proto = match upstream::prototypes::fetch(&state, &id).await {
        Ok(proto) => proto,
        Err(UpstreamError::Status { status: 404, .. }) => {
            return Err(AppError::NotFound("Prototype not found".to_string()));
        }
        Err(e) => {
            tracing::warn!("Failed to load prototype {id}: {e}");
            let template = ErrorTemplate {
                title: "Prototype".to_string(),
                message: format!("Failed to load: {e}"),
            };
            return Ok(Html(template.render().unwrap_or_default()));
        }
    };

    let response = proto.response.as_ref();
    let template = ShowTemplate {
        mock_url: format!(
            "{}/v1/mocky{}",
            state.config.mocky_base_url, proto.request.url_path
        ),
        id: proto.id.clone(),
        name: proto.name.clone(),
        method: proto.request.method.clone(),
        method_class: method_class(&proto.request.method),
        url_path: proto.request.url_path.clone(),
        created_at: format_timestamp(&proto.created_at),
        updated_at: format_timestamp(&proto.updated_at),
        delay: proto
            .request
            .delay
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "none".to_string()),
        headers: kv_rows(&proto.request.headers),
        path_params: kv_rows(&proto.request.path_params),
        body_schema: proto.request.body_schema.as_ref().map(pretty_json),
        response_status: response
            .map(|r| r.body.status_code.to_string())
            .unwrap_or_else(|| "200".to_string()),
        response_body: response
            .map(|r| serde_json::to_value(&r.body).unwrap_or_default())
            .as_ref()
            .map(pretty_json),
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn new_page() -> Html<String> {
    Html(NewTemplate.render().unwrap_or_default())
}

pub async fn edit_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let proto = upstream::prototypes::fetch(&state, &id)
        .await
        .map_err(|e| match e {
            UpstreamError::Status { status: 404, .. } => {
                AppError::NotFound("Prototype not found".to_string())
            }
            other => AppError::Upstream(other),
        })?;

    let template = edit_template(proto);
    Ok(Html(template.render().unwrap_or_default()))
}

fn edit_template(proto: Prototype) -> EditTemplate {
    let response_body = proto
        .response
        .as_ref()
        .map(|r| serde_json::to_value(&r.body).unwrap_or_default());

    EditTemplate {
        id: proto.id,
        name: proto.name,
        method: proto.request.method,
        url_path: proto.request.url_path,
        delay: proto
            .request
            .delay
            .map(|ms| ms.to_string())
            .unwrap_or_default(),
        headers: kv_rows(&proto.request.headers),
        path_params: kv_rows(&proto.request.path_params),
        body_schema: proto
            .request
            .body_schema
            .as_ref()
            .map(pretty_json)
            .unwrap_or_else(|| "{}".to_string()),
        response_status: proto
            .response
            .as_ref()
            .map(|r| r.body.status_code.to_string())
            .unwrap_or_else(|| "200".to_string()),
        response_body: response_body
            .as_ref()
            .map(pretty_json)
            .unwrap_or_else(|| "{}".to_string()),
    }
}

fn kv_rows(map: &Option<BTreeMap<String, String>>) -> Vec<(String, String)> {
    map.as_ref()
        .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
