//! Feature Insight - Rust Backend
//!
//! Extracts structured feature records from free-text articles and generates
//! industry-specific implementation guides, delegating to Gemini or OpenAI
//! behind a uniform provider abstraction.

pub mod config;
pub mod error;
pub mod llm;

pub use config::LlmConfig;
pub use error::LlmError;
pub use llm::{FeatureRecord, LlmClient, Provider, DEFAULT_INDUSTRY, GUIDE_FALLBACK};
