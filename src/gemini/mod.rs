//! Client for the Google Generative Language API.
//!
//! One call per generation: the fixed instruction plus the templated user
//! message go out, and the structured JSON answer comes back as a
//! [`GenerationResult`]. There is no retry; the first failure is returned.

pub mod request;
pub mod response;

use std::sync::Arc;

use crate::error::GenerationError;
use crate::models::{GenerationInput, GenerationResult};
use crate::startup::AppConfig;
use crate::traits::{Headers, HttpClient, HttpError};

pub use request::{build_user_message, response_schema, GenerateContentRequest, SYSTEM_INSTRUCTION};
pub use response::{parse_result, GenerateContentResponse};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest provider error body kept in a [`GenerationError`].
const MAX_ERROR_BODY: usize = 500;

/// Journaling prompt generator backed by `generateContent`.
#[derive(Clone)]
pub struct GeminiClient {
    http: Arc<dyn HttpClient>,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    /// Request one prompt/encouragement/affirmation triple.
    pub async fn generate(
        &self,
        input: &GenerationInput,
    ) -> Result<GenerationResult, GenerationError> {
        let request = GenerateContentRequest::for_input(input);
        tracing::debug!(
            model = %self.model,
            user_message = request.user_message().unwrap_or_default(),
            "Requesting journaling prompt"
        );

        let body = serde_json::to_value(&request)?;
        let mut headers = Headers::new();
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());

        let response = self.http.post_json(&self.endpoint(), &body, &headers).await?;

        if !response.is_success() {
            let mut message = response.text_lossy();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| message.is_char_boundary(*i))
                    .unwrap_or(0);
                message.truncate(cut);
            }
            return Err(HttpError::ServerError {
                status: response.status,
                message,
            }
            .into());
        }

        let envelope: GenerateContentResponse = response.json()?;
        let Some(text) = envelope.text() else {
            tracing::warn!(
                finish_reason = envelope.finish_reason().unwrap_or("none"),
                "Provider returned no candidate text"
            );
            return Err(GenerationError::EmptyResponse);
        };

        let result = parse_result(&text)?;
        tracing::info!(
            prompt_words = result.prompt.split_whitespace().count(),
            "Received journaling prompt"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{Mood, TimeOfDay};
    use crate::traits::Response;

    fn client_with(mock: &MockHttpClient) -> GeminiClient {
        let config = AppConfig::new("test-key").with_api_base("https://example.test/");
        GeminiClient::new(Arc::new(mock.clone()), &config)
    }

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}]
        })
        .to_string()
    }

    #[test]
    fn test_endpoint() {
        let client = client_with(&MockHttpClient::new());
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_success_sends_key_and_message() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            envelope(r#"{"prompt":"P","encouragement":"E","affirmation":"A"}"#),
        )));
        let client = client_with(&mock);

        let input = GenerationInput::new(Mood::Stressed, TimeOfDay::Evening, "Gratitude");
        let result = client.generate(&input).await.unwrap();
        assert_eq!(result, GenerationResult::new("P", "E", "A"));

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get(API_KEY_HEADER).map(String::as_str),
            Some("test-key")
        );
        assert_eq!(
            requests[0].body["contents"][0]["parts"][0]["text"],
            r#"My mood is "Stressed", the time is "Evening", and the theme is "Gratitude"."#
        );
    }

    #[tokio::test]
    async fn test_generate_http_status_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            403,
            "API key not valid",
        )));
        let err = client_with(&mock)
            .generate(&GenerationInput::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::HttpStatus {
                status: 403,
                message: "API key not valid".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_generate_truncates_long_error_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(500, "é".repeat(400))));
        let err = client_with(&mock)
            .generate(&GenerationInput::default())
            .await
            .unwrap_err();
        match err {
            GenerationError::HttpStatus { message, .. } => assert!(message.len() <= MAX_ERROR_BODY),
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_candidates() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, r#"{"candidates":[]}"#)));
        let err = client_with(&mock)
            .generate(&GenerationInput::default())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_generate_malformed_inner_json() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            envelope(r#"{"prompt":"P","encouragement":"E"}"#),
        )));
        let err = client_with(&mock)
            .generate(&GenerationInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidPayload { .. }));
    }

    #[tokio::test]
    async fn test_generate_transport_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let err = client_with(&mock)
            .generate(&GenerationInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Transport { .. }));
    }
}
