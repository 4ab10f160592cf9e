//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{provider_response, TestApp};
//!
//! let t = TestApp::new();
//! t.http.set_default_response(provider_response(&sample_result()));
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use mindspoke::adapters::mock::{
    MockClipboard, MockHttpClient, MockNativeShare, MockRasterizer, MockResponse, RasterBehavior,
};
use mindspoke::app::App;
use mindspoke::gemini::GeminiClient;
use mindspoke::models::GenerationResult;
use mindspoke::share::ShareService;
use mindspoke::startup::AppConfig;
use mindspoke::traits::Response;

/// The result used throughout the scenario tests.
pub fn sample_result() -> GenerationResult {
    GenerationResult::new(
        "What is one thing you are grateful for as this evening winds down?",
        "You carried a lot today; it is okay to set it down now.",
        "I am grateful for the small moments that held me.",
    )
}

/// A `generateContent` envelope whose only candidate text is `body`.
pub fn envelope(body: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": body}]},
            "finishReason": "STOP"
        }]
    })
}

/// A successful provider response carrying `result` as structured JSON.
pub fn provider_response(result: &GenerationResult) -> MockResponse {
    let text = serde_json::to_string(result).unwrap();
    MockResponse::Success(Response::new(200, envelope(&text).to_string()))
}

pub fn test_config() -> AppConfig {
    AppConfig::new("test-api-key").with_api_base("https://generativelanguage.test")
}

/// An [`App`] wired to mock collaborators, with handles to inspect them.
pub struct TestApp {
    pub app: App,
    pub http: MockHttpClient,
    pub native: MockNativeShare,
    pub clipboard: MockClipboard,
    pub rasterizer: MockRasterizer,
}

impl TestApp {
    /// No native share, working clipboard.
    pub fn new() -> Self {
        Self::with_share(
            MockRasterizer::new(RasterBehavior::Image),
            MockNativeShare::unavailable(),
            MockClipboard::new(),
        )
    }

    pub fn with_share(
        rasterizer: MockRasterizer,
        native: MockNativeShare,
        clipboard: MockClipboard,
    ) -> Self {
        let http = MockHttpClient::new();
        let gemini = GeminiClient::new(Arc::new(http.clone()), &test_config());
        let share = ShareService::new(
            Arc::new(rasterizer.clone()),
            Arc::new(native.clone()),
            Arc::new(clipboard.clone()),
        );
        Self {
            app: App::new(Arc::new(gemini), Arc::new(share)),
            http,
            native,
            clipboard,
            rasterizer,
        }
    }

    /// Wait for the next message from spawned work and apply it.
    pub async fn pump(&mut self) {
        let mut rx = self.app.message_rx.take().expect("receiver already taken");
        let msg = rx.recv().await.expect("channel closed");
        self.app.message_rx = Some(rx);
        self.app.handle_message(msg);
    }
}
