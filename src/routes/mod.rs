pub mod proxy;

use axum::routing::any;
use axum::Router;

use crate::state::SharedState;

pub fn proxy_routes() -> Router<SharedState> {
    Router::new().route("/api/proxy/{service}/{*path}", any(proxy::forward))
}
