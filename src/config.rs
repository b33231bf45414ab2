//! Provider configuration loaded once at startup

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// API keys and endpoints for both providers.
///
/// Constructed once at process start and passed into [`crate::llm::LlmClient`].
/// A missing key is reported loudly but does not block construction, since a
/// caller may only ever use the other provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_base_url: String,
    pub openai_base_url: String,
}

impl LlmConfig {
    /// Read `GEMINI_API_KEY` and `OPENAI_API_KEY` from the environment.
    pub fn from_env() -> Self {
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();

        if gemini_api_key.is_none() {
            tracing::error!("GEMINI_API_KEY not set - Gemini calls will return safe defaults");
        }
        if openai_api_key.is_none() {
            tracing::error!("OPENAI_API_KEY not set - OpenAI calls will return safe defaults");
        }

        Self {
            gemini_api_key,
            openai_api_key,
            gemini_base_url: GEMINI_API_BASE.to_string(),
            openai_base_url: OPENAI_API_BASE.to_string(),
        }
    }

    /// Override the Gemini endpoint. Configurable for testing.
    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the OpenAI endpoint. Configurable for testing.
    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}
