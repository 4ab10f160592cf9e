//! One-shot `--print` mode: generate once, print the share text.

use crate::error::GenerationError;
use crate::gemini::GeminiClient;
use crate::models::GenerationInput;
use crate::share::compose_share_text;

/// Run one generation and return the text to print.
pub async fn run_print(
    client: &GeminiClient,
    input: &GenerationInput,
) -> Result<String, GenerationError> {
    let result = client.generate(input).await?;
    Ok(compose_share_text(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{Mood, TimeOfDay};
    use crate::startup::AppConfig;
    use crate::traits::Response;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_run_print_formats_share_text() {
        let http = MockHttpClient::new();
        let text = r#"{"prompt":"P?","encouragement":"E.","affirmation":"A."}"#;
        let body = serde_json::json!({"candidates": [{"content": {"parts": [{"text": text}]}}]});
        http.set_default_response(MockResponse::Success(Response::new(200, body.to_string())));
        let client = GeminiClient::new(Arc::new(http), &AppConfig::new("k"));

        let out = run_print(&client, &GenerationInput::new(Mood::Calm, TimeOfDay::Night, ""))
            .await
            .unwrap();
        assert!(out.starts_with("Journaling prompt:\n\"P?\""));
    }

    #[tokio::test]
    async fn test_run_print_propagates_error() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::new(503, "busy")));
        let client = GeminiClient::new(Arc::new(http), &AppConfig::new("k"));

        let err = run_print(&client, &GenerationInput::default()).await.unwrap_err();
        assert!(matches!(err, GenerationError::HttpStatus { status: 503, .. }));
    }
}
