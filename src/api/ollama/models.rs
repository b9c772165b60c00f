use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /api/generate
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Non-streaming response from POST /api/generate
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Error type for local language model calls
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("Request Error: {0}")]
    Request(String),
    #[error("HTTP Error ({0}): {1}")]
    Http(u16, String),
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}
