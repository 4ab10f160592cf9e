//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: serde_json::Value,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client.
///
/// Scripted responses are consumed in request order; once the script is
/// empty the default response is used. Each scripted response may carry a
/// delay, which lets tests make an earlier request resolve after a later one.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.push_response(MockResponse::Success(slow), Some(Duration::from_millis(50)));
/// client.push_response(MockResponse::Success(fast), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<VecDeque<(MockResponse, Option<Duration>)>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, response: MockResponse, delay: Option<Duration>) {
        self.script.lock().unwrap().push_back((response, delay));
    }

    /// Response used once the script is exhausted.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> (Option<MockResponse>, Option<Duration>) {
        if let Some((response, delay)) = self.script.lock().unwrap().pop_front() {
            return (Some(response), delay);
        }
        (self.default_response.lock().unwrap().clone(), None)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.clone(),
        });

        // Pick the response before sleeping so ordering follows request order.
        let (response, delay) = self.next_response();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
