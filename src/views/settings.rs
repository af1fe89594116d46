use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::SharedState;

#[derive(Template)]
#[template(path = "settings/index.html")]
#[allow(dead_code)]
struct SettingsTemplate {
    mocky_base_url: String,
    chat_base_url: String,
    max_body_size: String,
}

pub async fn index(State(state): State<SharedState>) -> impl IntoResponse {
    let template = SettingsTemplate {
        mocky_base_url: state.config.mocky_base_url.clone(),
        chat_base_url: state.config.chat_base_url.clone(),
        max_body_size: state.config.max_body_size.to_string(),
    };
    Html(template.render().unwrap_or_default())
}
