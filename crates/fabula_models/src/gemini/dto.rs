//! Gemini generateContent wire types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text part within a content block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiPart {
    /// Text payload
    text: String,
}

impl GeminiPart {
    /// Creates a new builder for `GeminiPart`.
    pub fn builder() -> GeminiPartBuilder {
        GeminiPartBuilder::default()
    }
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiContent {
    /// Parts of this content block
    #[serde(default)]
    #[builder(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Creates a new builder for `GeminiContent`.
    pub fn builder() -> GeminiContentBuilder {
        GeminiContentBuilder::default()
    }
}

/// generateContent request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Creates a new builder for `GeminiRequest`.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }

    /// Build a single-turn request from prompt text.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt.into() }],
            }],
        }
    }
}

/// A generated candidate reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GeminiCandidate {
    /// Generated content
    content: GeminiContent,
}

/// generateContent response body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Generated candidates (empty when the prompt was blocked)
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_contents_parts_shape() {
        let request = GeminiRequest::from_prompt("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents":[{"parts":[{"text":"hello"}]}]})
        );
    }

    #[test]
    fn response_parses_and_ignores_extra_fields() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "first "}, {"text": "second"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_candidate_text().unwrap(), "first second");
    }

    #[test]
    fn blocked_prompt_yields_no_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.first_candidate_text().is_none());
    }
}
