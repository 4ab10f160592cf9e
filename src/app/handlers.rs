//! Message handling for the App.

use std::time::Instant;

use crate::share::ShareCard;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::GenerationFinished { ticket, result } => {
                if !self.generation.resolve(ticket, result) {
                    return;
                }
                // Mount the card as soon as there is something to share.
                self.share_card = self
                    .generation
                    .state()
                    .result()
                    .cloned()
                    .map(ShareCard::new);
            }
            AppMessage::ShareFinished(outcome) => {
                self.share_status.finish(&outcome, Instant::now());
            }
        }
    }

    /// Drain every message currently queued, without waiting.
    ///
    /// Returns the number of messages handled.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        handled
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{harness, harness_with};
    use crate::adapters::mock::{MockClipboard, MockNativeShare, MockResponse};
    use crate::error::{GenerationError, ShareError, GENERATION_FAILED_MESSAGE};
    use crate::models::GenerationResult;
    use crate::share::ShareOutcome;
    use crate::state::GenerationState;
    use crate::traits::Response;

    use super::*;

    fn provider_body(result: &GenerationResult) -> Response {
        let text = serde_json::to_string(result).unwrap();
        let body = serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        });
        Response::new(200, body.to_string())
    }

    #[test]
    fn test_success_mounts_card() {
        let mut h = harness();
        let ticket = h.app.generation.begin();
        let result = GenerationResult::new("p", "e", "a");
        h.app.handle_message(AppMessage::GenerationFinished {
            ticket,
            result: Ok(result.clone()),
        });
        assert_eq!(h.app.generation.state(), &GenerationState::Success(result.clone()));
        assert_eq!(h.app.share_card.as_ref().map(|c| c.result()), Some(&result));
        assert!(h.app.can_share());
    }

    #[test]
    fn test_failure_leaves_no_card() {
        let mut h = harness();
        let ticket = h.app.generation.begin();
        h.app.handle_message(AppMessage::GenerationFinished {
            ticket,
            result: Err(GenerationError::EmptyResponse),
        });
        assert_eq!(h.app.generation.state().error(), Some(GENERATION_FAILED_MESSAGE));
        assert!(h.app.share_card.is_none());
    }

    #[test]
    fn test_share_failure_sets_alert() {
        let mut h = harness();
        h.app.share_status.start();
        h.app.handle_message(AppMessage::ShareFinished(ShareOutcome::Failed(
            ShareError::Clipboard("denied".into()),
        )));
        assert!(h.app.share_status.alert().is_some());
        assert!(!h.app.share_status.is_busy());
    }

    #[tokio::test]
    async fn test_trigger_generate_round_trip() {
        let mut h = harness();
        let expected = GenerationResult::new("What lifted you?", "Well done.", "I am calm.");
        h.http
            .set_default_response(MockResponse::Success(provider_body(&expected)));

        assert!(h.app.trigger_generate());
        assert!(h.app.is_generating());
        // Disabled while loading.
        assert!(!h.app.trigger_generate());

        let mut rx = h.app.message_rx.take().unwrap();
        let msg = rx.recv().await.unwrap();
        h.app.handle_message(msg);

        assert_eq!(h.app.generation.state().result(), Some(&expected));
        assert_eq!(h.http.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_trigger_share_is_guarded() {
        let mut h = harness_with(MockNativeShare::unavailable(), MockClipboard::new());
        assert!(!h.app.trigger_share());

        h.app.share_card = Some(ShareCard::new(GenerationResult::new("p", "e", "a")));
        assert!(h.app.trigger_share());
        assert!(!h.app.trigger_share());

        let mut rx = h.app.message_rx.take().unwrap();
        let msg = rx.recv().await.unwrap();
        h.app.handle_message(msg);

        assert!(h.app.share_status.is_copied());
        assert_eq!(h.clipboard.writes().len(), 1);
        assert_eq!(h.native.share_count(), 0);
    }
}
