//! LLM abstraction layer for unified API calls
//!
//! Normalizes Gemini (native schema-constrained JSON) and OpenAI (forced
//! tool call) behind two operations: structured feature extraction and
//! free-text guide generation. Neither operation ever fails from the
//! caller's perspective; every error collapses into a safe default.

pub mod gemini;
pub mod openai;
pub mod schema;

use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

/// Industry framing applied when the caller does not supply one.
pub const DEFAULT_INDUSTRY: &str = "General Tech";

/// Returned when guide generation fails. A fixed fragment rather than an
/// empty string, so callers can always embed the result as markup.
pub const GUIDE_FALLBACK: &str =
    "<p>Sorry, the guide could not be generated at this time. Please try again later.</p>";

/// Which LLM service handles a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    OpenAi,
}

impl Provider {
    /// Parse a provider selector string.
    ///
    /// Anything other than "openai" (typos included) falls through to
    /// Gemini - the documented default path, not an error.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "openai" => Provider::OpenAi,
            _ => Provider::Gemini,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted technical update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub feature_name: String,
    pub feature_summary: String,
    /// The prompt asks for exactly 3 entries; the length is advisory and
    /// never validated.
    pub potential_use_cases: Vec<String>,
}

/// Stateless adapter over both providers. Holds one shared HTTP client and
/// the startup configuration; cloning is cheap and concurrent calls do not
/// interfere.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Extract technical feature records from an article.
    ///
    /// Returns the features in source-text order. An empty vec means either
    /// a non-technical article or a failed call; callers get no distinction
    /// beyond the logs. Never returns an error.
    pub async fn extract_features(
        &self,
        article_text: &str,
        provider: Provider,
    ) -> Vec<FeatureRecord> {
        let prompt = extraction_prompt(article_text);

        let result = match provider {
            Provider::OpenAi => {
                openai::extract_features(&self.http, &self.config, &prompt).await
            }
            Provider::Gemini => {
                gemini::extract_features(&self.http, &self.config, &prompt).await
            }
        };

        match result {
            Ok(features) => features,
            Err(e) => {
                tracing::error!("{} feature extraction failed: {}", provider, e);
                Vec::new()
            }
        }
    }

    /// Generate an industry-framed implementation guide as an HTML fragment.
    ///
    /// `use_case` is expected to come from the feature's own
    /// `potential_use_cases` but is not validated against it. Never returns
    /// an error; failures yield [`GUIDE_FALLBACK`].
    pub async fn generate_guide(
        &self,
        feature: &FeatureRecord,
        use_case: &str,
        provider: Provider,
        industry: &str,
    ) -> String {
        let prompt = guide_prompt(feature, use_case, industry);

        let result = match provider {
            Provider::OpenAi => {
                openai::generate_text(&self.http, &self.config, &prompt).await
            }
            Provider::Gemini => {
                gemini::generate_text(&self.http, &self.config, &prompt).await
            }
        };

        match result {
            Ok(text) => strip_code_fences(&text).to_string(),
            Err(e) => {
                tracing::error!("{} guide generation failed: {}", provider, e);
                GUIDE_FALLBACK.to_string()
            }
        }
    }
}

fn extraction_prompt(article_text: &str) -> String {
    format!(
        "You are a technical analyst for enterprise software news. \
        Extract technical product updates from the article below.\n\
        \n\
        RULES:\n\
        1. Only include concrete technical features, capabilities, or product updates.\n\
        2. Skip corporate news, earnings, hiring, events, and other non-technical content.\n\
        3. If the article contains no qualifying technical content, return an empty array - not an error.\n\
        4. For each feature provide featureName, a 2-3 sentence featureSummary, and exactly 3 potentialUseCases.\n\
        5. Output must conform strictly to the supplied schema, with no extra commentary.\n\
        \n\
        Article:\n{}",
        article_text
    )
}

fn guide_prompt(feature: &FeatureRecord, use_case: &str, industry: &str) -> String {
    format!(
        "You are a senior solutions engineer writing for the {industry} industry.\n\
        \n\
        Write a practical implementation guide for the feature \"{name}\".\n\
        Feature summary: {summary}\n\
        Target use case: {use_case}\n\
        \n\
        REQUIREMENTS:\n\
        1. Frame everything for the {industry} industry: use its terminology and mention compliance considerations where relevant.\n\
        2. Structure: an introduction, a prerequisites section, at least 3 actionable technical steps with explanations, and a conclusion tying the feature to business value.\n\
        3. Output an HTML fragment using tags like <h2>, <p>, <ul> and <ol>. Do NOT include <html>, <head>, or <body> tags.",
        industry = industry,
        name = feature.feature_name,
        summary = feature.feature_summary,
        use_case = use_case,
    )
}

/// Models sometimes wrap output in markdown fences even when asked not to.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```html")
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
