use reqwest::Client as HttpClient;

use super::models::{GenerateRequest, GenerateResponse, LlmError};

/// Client for a locally hosted Ollama model server
#[derive(Clone)]
pub struct OllamaClient {
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub const DEFAULT_MODEL: &'static str = "phi:latest";

    pub fn new(base_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            model,
        }
    }

    /// Run a single non-streaming completion and return the raw response text
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Http(status.as_u16(), body));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(e.to_string()))?;

        Ok(body.response)
    }
}
