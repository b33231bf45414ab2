//! JSON schemas shared by the structured-extraction paths
//!
//! Gemini's structured-output mode accepts an array root, so it gets the bare
//! array envelope. OpenAI enforces schemas through function-call parameters,
//! which must be object-rooted, so its features arrive wrapped in an object.

use serde_json::{json, Value};

/// Property holding the feature array inside the object envelope. The OpenAI
/// tool parameter schema and the tool-call argument parser must agree on it.
pub const EXTRACTED_FEATURES_KEY: &str = "extractedFeatures";

/// Shape of a single extracted feature.
pub fn feature_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "featureName": { "type": "string" },
            "featureSummary": { "type": "string" },
            "potentialUseCases": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["featureName", "featureSummary", "potentialUseCases"]
    })
}

/// Array-rooted envelope, used as the Gemini `response_schema`.
pub fn array_envelope_schema() -> Value {
    json!({
        "type": "array",
        "items": feature_object_schema()
    })
}

/// Object-rooted envelope, used as the OpenAI tool parameter schema.
pub fn object_envelope_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            EXTRACTED_FEATURES_KEY: array_envelope_schema()
        },
        "required": [EXTRACTED_FEATURES_KEY]
    })
}
