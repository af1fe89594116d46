use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::SharedState;
use crate::upstream;
use crate::views::method_class;

#[derive(Template)]
#[template(path = "tester/index.html")]
#[allow(dead_code)]
struct TesterTemplate {
    error: Option<String>,
    prototypes: Vec<TesterPrototype>,
}

#[allow(dead_code)]
struct TesterPrototype {
    id: String,
    name: String,
    method: String,
    method_class: &'static str,
    url_path: String,
    /// Proxied URL the tester submits to, e.g.
    /// `/api/proxy/mocky/v1/mocky/api/users`.
    test_url: String,
}

pub async fn index(State(state): State<SharedState>) -> impl IntoResponse {
    let (prototypes, error) = match upstream::prototypes::list(&state).await {
        Ok(list) => (list, None),
        Err(e) => {
            tracing::warn!("Failed to load prototypes for tester: {e}");
            (Vec::new(), Some(format!("Failed to load prototypes: {e}")))
        }
    };

    let prototypes = prototypes
        .iter()
        .map(|p| TesterPrototype {
            id: p.id.clone(),
            name: if p.name.is_empty() {
                "Untitled".to_string()
            } else {
                p.name.clone()
            },
            method: p.request.method.clone(),
            method_class: method_class(&p.request.method),
            url_path: p.request.url_path.clone(),
            test_url: format!("/api/proxy/mocky/v1/mocky{}", p.request.url_path),
        })
        .collect();

    let template = TesterTemplate { error, prototypes };
    Html(template.render().unwrap_or_default())
}
