//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::task::{Environment, GeneratedFile};

/// Raw form submission. Every field is optional so that missing inputs are
/// reported through validation instead of a rejected request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub base_filename: Option<String>,
    /// Newline-separated tile IDs.
    #[serde(default)]
    pub tile_ids: Option<String>,
}

/// Response for `POST /api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub environment: Environment,
    pub earthcore_url: String,
    pub task_count: usize,
    pub files: Vec<GeneratedFile>,
}

/// Error body for JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dev_mode: bool,
}
