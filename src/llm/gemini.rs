//! Gemini LLM provider implementation
//!
//! Gemini constrains structured output natively via `response_schema`, so
//! extraction parses the response text directly as a feature array.

use serde_json::json;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::{schema, strip_code_fences, FeatureRecord, Provider};

const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Extract feature records using JSON-constrained generation.
pub(crate) async fn extract_features(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<Vec<FeatureRecord>, LlmError> {
    let body = json!({
        "contents": [{"parts": [{"text": prompt}]}],
        "generationConfig": {
            "temperature": 0.1,
            "response_mime_type": "application/json",
            "response_schema": schema::array_envelope_schema(),
        }
    });

    let response_body = send(client, config, &body).await?;
    parse_extraction(&response_body)
}

/// Generate free-form guide text.
pub(crate) async fn generate_text(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let body = json!({
        "contents": [{"parts": [{"text": prompt}]}],
        "generationConfig": { "temperature": 0.7 }
    });

    let response_body = send(client, config, &body).await?;
    response_text(&response_body)
}

async fn send(
    client: &reqwest::Client,
    config: &LlmConfig,
    body: &serde_json::Value,
) -> Result<String, LlmError> {
    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or(LlmError::MissingCredential(Provider::Gemini))?;

    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.gemini_base_url, GEMINI_MODEL, api_key
    );

    let response = client.post(&url).json(body).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            provider: Provider::Gemini,
            status,
            body: error_text,
        });
    }

    Ok(response.text().await?)
}

/// Pull the generated text out of the candidate structure:
/// `candidates[0].content.parts[0].text`.
fn response_text(body: &str) -> Result<String, LlmError> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    json.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|t| t.get("text"))
        .and_then(|s| s.as_str())
        .map(|s| s.to_string())
        .ok_or(LlmError::Malformed(Provider::Gemini))
}

pub(crate) fn parse_extraction(body: &str) -> Result<Vec<FeatureRecord>, LlmError> {
    let text = response_text(body)?;
    let clean = strip_code_fences(&text);
    Ok(serde_json::from_str(clean)?)
}
