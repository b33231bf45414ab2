//! Error types for the LLM provider layer

use crate::llm::Provider;

/// Internal failure taxonomy. Never escapes the two public adapter
/// operations; `LlmClient` absorbs these into the per-operation safe default.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{provider} API error {status}: {body}")]
    Api {
        provider: Provider,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0} API key not configured")]
    MissingCredential(Provider),

    #[error("Unexpected {0} response structure")]
    Malformed(Provider),
}
