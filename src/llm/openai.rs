//! OpenAI chat completions provider
//!
//! OpenAI's structured-output mode only accepts object-rooted schemas, so
//! extraction forces a function call whose parameters are the object
//! envelope, then unwraps the feature array from the call arguments.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::{schema, FeatureRecord, Provider};

const OPENAI_MODEL: &str = "gpt-4o-mini";
const EXTRACTION_TOOL: &str = "record_extracted_features";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: String,
}

/// Extract feature records via a forced tool call.
pub(crate) async fn extract_features(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<Vec<FeatureRecord>, LlmError> {
    let body = json!({
        "model": OPENAI_MODEL,
        "messages": [{"role": "user", "content": prompt}],
        "temperature": 0.1,
        "tools": [{
            "type": "function",
            "function": {
                "name": EXTRACTION_TOOL,
                "description": "Record the technical features extracted from the article",
                "parameters": schema::object_envelope_schema(),
            }
        }],
        "tool_choice": {
            "type": "function",
            "function": { "name": EXTRACTION_TOOL }
        }
    });

    let response_body = send(client, config, &body).await?;
    parse_extraction(&response_body)
}

/// Generate free-form guide text from a plain chat completion.
pub(crate) async fn generate_text(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String, LlmError> {
    let request = ChatCompletionRequest {
        model: OPENAI_MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: 0.7,
    };

    let response_body = send(client, config, &serde_json::to_value(&request)?).await?;
    parse_generation(&response_body)
}

async fn send(
    client: &reqwest::Client,
    config: &LlmConfig,
    body: &serde_json::Value,
) -> Result<String, LlmError> {
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(LlmError::MissingCredential(Provider::OpenAi))?;

    let url = format!(
        "{}/chat/completions",
        config.openai_base_url.trim_end_matches('/')
    );

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            provider: Provider::OpenAi,
            status,
            body: error_text,
        });
    }

    Ok(response.text().await?)
}

pub(crate) fn parse_extraction(body: &str) -> Result<Vec<FeatureRecord>, LlmError> {
    let data: ChatCompletionResponse = serde_json::from_str(body)?;

    let arguments = data
        .choices
        .first()
        .and_then(|c| c.message.tool_calls.as_ref())
        .and_then(|calls| calls.first())
        .map(|call| call.function.arguments.clone())
        .ok_or(LlmError::Malformed(Provider::OpenAi))?;

    let wrapper: serde_json::Value = serde_json::from_str(&arguments)?;

    match wrapper.get(schema::EXTRACTED_FEATURES_KEY) {
        Some(features) => Ok(serde_json::from_value(features.clone())?),
        // A missing wrapper key means the model recorded nothing, not an error.
        None => Ok(Vec::new()),
    }
}

fn parse_generation(body: &str) -> Result<String, LlmError> {
    let data: ChatCompletionResponse = serde_json::from_str(body)?;

    data.choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or(LlmError::Malformed(Provider::OpenAi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool_call_body(arguments: &str) -> String {
        json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "function": { "name": EXTRACTION_TOOL, "arguments": arguments }
                    }]
                }
            }]
        })
        .to_string()
    }

    #[test]
    fn test_parse_extraction_unwraps_envelope() {
        let body = tool_call_body(
            r#"{"extractedFeatures":[{"featureName":"A","featureSummary":"S.","potentialUseCases":["1","2","3"]}]}"#,
        );

        let features = parse_extraction(&body).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].feature_name, "A");
    }

    #[test]
    fn test_parse_extraction_missing_key_is_empty() {
        let features = parse_extraction(&tool_call_body("{}")).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_parse_extraction_malformed_arguments() {
        assert!(parse_extraction(&tool_call_body("not json")).is_err());
    }

    #[test]
    fn test_parse_extraction_without_tool_call() {
        let body = json!({
            "choices": [{ "message": { "content": "plain text answer" } }]
        })
        .to_string();

        let err = parse_extraction(&body).unwrap_err();
        assert!(matches!(err, LlmError::Malformed(Provider::OpenAi)));
    }

    #[test]
    fn test_parse_generation_reads_content() {
        let body = json!({
            "choices": [{ "message": { "content": "<h2>Guide</h2>" } }]
        })
        .to_string();

        assert_eq!(parse_generation(&body).unwrap(), "<h2>Guide</h2>");
    }
}
