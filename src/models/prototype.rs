use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A mock endpoint definition as stored by the mock-API backend.
///
/// List responses carry only the summary fields; `response` is present on
/// single-record fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prototype {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub request: PrototypeRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<PrototypeResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeRequest {
    pub method: String,
    #[serde(rename = "urlPath")]
    pub url_path: String,
    /// Artificial response delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_params: Option<BTreeMap<String, String>>,
    /// Free-form schema for the expected request body; the backend owns its
    /// shape, so it is kept as raw JSON.
    #[serde(default, rename = "bodySchema", skip_serializing_if = "Option::is_none")]
    pub body_schema: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeResponse {
    pub body: ResponseBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

/// The canned response payload; user-added keys land in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub data: Value,
    #[serde(default = "default_status_code")]
    pub status_code: u16,
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_status_code() -> u16 {
    200
}

/// `GET /v1/prototypes` envelope.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub results: Vec<Prototype>,
    pub status_code: u16,
    pub success: bool,
    #[serde(default)]
    pub trace_id: Option<String>,
}

/// `GET /v1/prototypes/{id}` envelope.
#[derive(Debug, Deserialize)]
pub struct ItemEnvelope {
    pub data: Prototype,
    pub status_code: u16,
    pub success: bool,
    #[serde(default)]
    pub trace_id: Option<String>,
}
