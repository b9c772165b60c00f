use crate::api::ollama::OllamaClient;

/// Wrap a user question in the fixed assistant instruction
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are an expert stock market assistant. Answer the following query:\n\n{}",
        question
    )
}

/// Ask the local model for commentary on a question
pub async fn ask(client: &OllamaClient, question: &str) -> Result<String, String> {
    client
        .generate(&build_prompt(question))
        .await
        .map_err(|e| format!("AI model error: {}", e))
}
