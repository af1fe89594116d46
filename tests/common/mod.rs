use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{Path, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};

use mocky::config::Config;

/// A running dashboard instance wired to a stub backend.
pub struct TestApp {
    pub addr: SocketAddr,
    pub upstream_addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn the app with a live stub backend as the `mocky` target. The `chat`
/// target always points at a closed port, so chat proxying exercises the
/// upstream-failure path.
pub async fn spawn_app() -> TestApp {
    let upstream_addr = spawn_router(stub_backend()).await;
    spawn_app_with(upstream_addr).await
}

/// Spawn the app with the `mocky` target pointing at a closed port.
pub async fn spawn_app_unreachable_backend() -> TestApp {
    spawn_app_with(unreachable_addr()).await
}

async fn spawn_app_with(upstream_addr: SocketAddr) -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        mocky_base_url: format!("http://{upstream_addr}"),
        chat_base_url: format!("http://{}", unreachable_addr()),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = mocky::build_app(config);
    let addr = spawn_router(app).await;

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        upstream_addr,
        client,
    }
}

async fn spawn_router(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    addr
}

/// An address nothing listens on.
fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// ── Stub backend ────────────────────────────────────────────────
//
// Stands in for the mock-API service: echo endpoints for proxy assertions
// plus canned prototype data for the rendered views.

fn stub_backend() -> Router {
    Router::new()
        .route(
            "/v1/prototypes",
            get(list_prototypes).post(create_prototype),
        )
        .route("/v1/prototypes/{id}", get(get_prototype))
        .route("/relay", get(relay_probe))
        .route("/redirect", get(redirect_probe))
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
}

/// Reflects the received request back as JSON; request facts are also
/// exposed as response headers so HEAD requests can assert on them.
async fn echo(req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    let headers: serde_json::Map<String, Value> = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    let payload = json!({
        "method": parts.method.as_str(),
        "path": parts.uri.path(),
        "query": parts.uri.query(),
        "headers": headers,
        "body": String::from_utf8_lossy(&body),
    });

    let mut resp = Json(payload).into_response();
    let headers = resp.headers_mut();
    headers.insert("x-echo-method", parts.method.as_str().parse().unwrap());
    headers.insert("x-echo-body-len", body.len().to_string().parse().unwrap());
    resp
}

async fn relay_probe() -> Response {
    Response::builder()
        .status(StatusCode::IM_A_TEAPOT)
        .header("x-upstream-marker", "relay")
        .header(header::CONTENT_ENCODING, "identity")
        .body(Body::from("probe"))
        .unwrap()
}

async fn redirect_probe() -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, "http://example.com/next")
        .body(Body::empty())
        .unwrap()
}

fn proto_summary(id: &str, name: &str, method: &str, url_path: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "createdAt": "2024-01-15T10:00:00Z",
        "updatedAt": "2024-01-16T11:30:00Z",
        "request": { "method": method, "urlPath": url_path }
    })
}

async fn list_prototypes() -> Json<Value> {
    Json(json!({
        "results": [
            proto_summary("proto-1", "Health check", "GET", "/v1/health"),
            proto_summary("proto-2", "User Authentication", "POST", "/v1/signin"),
        ],
        "status_code": 200,
        "success": true,
        "trace_id": "trace-list"
    }))
}

async fn get_prototype(Path(id): Path<String>) -> Response {
    if id != "proto-1" {
        let body = json!({
            "data": null,
            "status_code": 404,
            "success": false,
            "trace_id": "trace-miss"
        });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    Json(json!({
        "data": {
            "id": "proto-1",
            "name": "Health check",
            "createdAt": "2024-01-15T10:00:00Z",
            "updatedAt": "2024-01-16T11:30:00Z",
            "request": {
                "method": "GET",
                "urlPath": "/v1/health",
                "delay": 200,
                "headers": { "Content-Type": "application/json" },
                "path_params": { "id": "[0-9]+" },
                "bodySchema": { "name": "HealthSchema", "type_schema": "object" }
            },
            "response": {
                "body": { "data": { "status": "up" }, "status_code": 200, "success": true }
            }
        },
        "status_code": 200,
        "success": true,
        "trace_id": "trace-get"
    }))
    .into_response()
}

async fn create_prototype(Json(payload): Json<Value>) -> Json<Value> {
    let mut stored = payload;
    if stored.get("id").is_none() {
        stored["id"] = json!("proto-new");
    }
    stored["createdAt"] = json!("2024-02-01T09:00:00Z");
    stored["updatedAt"] = json!("2024-02-01T09:00:00Z");

    Json(json!({
        "data": stored,
        "status_code": 200,
        "success": true,
        "trace_id": "trace-create"
    }))
}
