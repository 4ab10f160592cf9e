//! Response parsing for the `generateContent` endpoint.

use serde::Deserialize;

use super::request::Content;
use crate::error::GenerationError;
use crate::models::GenerationResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Only the parts of the response envelope we read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

/// Parse the structured-output text into a result.
///
/// All three fields must be present strings; values are kept verbatim.
pub fn parse_result(text: &str) -> Result<GenerationResult, GenerationError> {
    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_parts() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.text().as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(envelope.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_text_none_without_candidates() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(envelope.text().is_none());
    }

    #[test]
    fn test_text_none_for_blank_parts() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(envelope.text().is_none());
    }

    #[test]
    fn test_parse_result_verbatim() {
        let result = parse_result(
            r#" {"prompt":"  What grounds you? ","encouragement":"Breathe.","affirmation":"I am enough."} "#,
        )
        .unwrap();
        assert_eq!(result.prompt, "  What grounds you? ");
        assert_eq!(result.encouragement, "Breathe.");
        assert_eq!(result.affirmation, "I am enough.");
    }

    #[test]
    fn test_parse_result_rejects_missing_affirmation() {
        let err = parse_result(r#"{"prompt":"p","encouragement":"e"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidPayload { .. }));
    }

    #[test]
    fn test_parse_result_rejects_prose() {
        let err = parse_result("Here is your prompt: breathe.").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidPayload { .. }));
    }
}
