use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure talking to a backend service from the typed upstream client.
#[derive(Debug)]
pub enum UpstreamError {
    /// The backend answered with a non-2xx status.
    Status { status: u16, body: String },
    Network(reqwest::Error),
    Decode(serde_json::Error),
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            UpstreamError::Network(err) => write!(f, "Request failed: {err}"),
            UpstreamError::Decode(err) => write!(f, "Invalid response body: {err}"),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Upstream(UpstreamError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Upstream(err) => write!(f, "Upstream Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(err) => {
                tracing::error!("Upstream error: {err}");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}
