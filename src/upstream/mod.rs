//! Typed reqwest calls against the external backends.
//!
//! The dashboard owns no data; every page renders copies fetched from the
//! mock-API service through these functions.

pub mod prototypes;

use crate::error::UpstreamError;

/// Cap stored error bodies so a misbehaving backend cannot flood logs or
/// error banners.
pub(crate) fn truncate_body(body: String) -> String {
    body.chars().take(1024).collect()
}

pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, UpstreamError> {
    let status = resp.status();
    let text = resp.text().await.map_err(UpstreamError::Network)?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body: truncate_body(text),
        });
    }

    serde_json::from_str(&text).map_err(UpstreamError::Decode)
}
