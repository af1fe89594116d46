use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::SharedState;

/// Recomputed by the outbound transport, never forwarded.
const STRIPPED_REQUEST_HEADERS: [&str; 3] = ["host", "connection", "content-length"];

/// Forward `ANY /api/proxy/{service}/{*path}` to the configured backend.
///
/// The request is relayed verbatim: method, filtered headers, raw body, and
/// the original query string. The upstream response comes back unchanged
/// except for `content-encoding`/`transfer-encoding`, which no longer
/// describe the re-framed body. Redirects are relayed, not followed.
pub async fn forward(
    State(state): State<SharedState>,
    Path((service, path)): Path<(String, String)>,
    req: Request,
) -> Result<Response, Response> {
    let Some(base) = state.config.service_base(&service) else {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Unknown service: {service}"),
        )
            .into_response());
    };

    let (parts, body) = req.into_parts();
    let target = target_url(base, &path, parts.uri.query());

    tracing::debug!(
        method = %parts.method,
        service = %service,
        target = %target,
        "Forwarding request"
    );

    let mut outbound = state
        .http
        .request(parts.method.clone(), target.as_str())
        .headers(forward_headers(&parts.headers));

    if parts.method != Method::GET && parts.method != Method::HEAD {
        let bytes = match axum::body::to_bytes(body, state.config.max_body_size).await {
            Ok(bytes) => bytes,
            Err(_) => {
                return Err((
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Request body too large".to_string(),
                )
                    .into_response());
            }
        };
        outbound = outbound.body(bytes);
    }

    let upstream = match outbound.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(target = %target, error = %e, "Upstream request failed");
            return Err((
                StatusCode::BAD_GATEWAY,
                format!("Upstream request failed: {e}"),
            )
                .into_response());
        }
    };

    Ok(relay(upstream))
}

fn target_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

fn forward_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in inbound {
        if STRIPPED_REQUEST_HEADERS.contains(&name.as_str()) {
            continue;
        }
        out.append(name, value.clone());
    }
    out
}

fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    headers.remove(header::CONTENT_ENCODING);
    headers.remove(header::TRANSFER_ENCODING);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
