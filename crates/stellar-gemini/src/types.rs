// Gemini Protocol Types
//
// These types represent the generateContent request/response format, limited
// to the two exchanges the gateway makes: one with a structured-output
// schema, one plain text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// generateContent request body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
            generation_config: None,
        }
    }

    /// Constrain the response to JSON conforming to `schema`
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        });
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Output constraints attached to a request
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

/// generateContent response body
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// The concatenated text of the first candidate.
    ///
    /// Empty when the service answered without a candidate or without text
    /// parts; the caller decides what an empty completion means.
    pub fn completion_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_text_concatenates_the_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "alpha "}, {"text": "beta"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.completion_text(), "alpha beta");
    }

    #[test]
    fn completion_text_is_empty_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.completion_text(), "");

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(response.completion_text(), "");
    }
}
