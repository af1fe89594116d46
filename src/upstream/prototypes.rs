use crate::error::UpstreamError;
use crate::models::{ItemEnvelope, ListEnvelope, Prototype};
use crate::state::AppState;

pub async fn list(state: &AppState) -> Result<Vec<Prototype>, UpstreamError> {
    let url = format!("{}/v1/prototypes", state.config.mocky_base_url);
    let resp = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(UpstreamError::Network)?;

    let envelope: ListEnvelope = super::read_json(resp).await?;
    Ok(envelope.results)
}

pub async fn fetch(state: &AppState, id: &str) -> Result<Prototype, UpstreamError> {
    let url = format!("{}/v1/prototypes/{id}", state.config.mocky_base_url);
    let resp = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(UpstreamError::Network)?;

    let envelope: ItemEnvelope = super::read_json(resp).await?;
    Ok(envelope.data)
}
