//! User-triggered actions that spawn async work.

use std::sync::Arc;

use super::{App, AppMessage};

impl App {
    /// Start a generation for the current form input.
    ///
    /// Ignored while a generation is already loading. Returns whether a
    /// request was started.
    pub fn trigger_generate(&mut self) -> bool {
        if self.is_generating() {
            tracing::debug!("Generate ignored, request already in flight");
            return false;
        }
        self.start_generation();
        true
    }

    /// Enter `Loading` and spawn the provider call, regardless of any
    /// request already in flight. The newest request always wins.
    pub fn start_generation(&mut self) {
        let ticket = self.generation.begin();
        self.share_card = None;
        self.share_status.reset();
        self.mark_dirty();

        let input = self.form.input().clone();
        let client = Arc::clone(&self.gemini);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.generate(&input).await;
            let _ = tx.send(AppMessage::GenerationFinished { ticket, result });
        });
    }

    /// Share the mounted card. Ignored without a result or while a share is
    /// already in progress.
    pub fn trigger_share(&mut self) -> bool {
        let Some(card) = self.share_card.clone() else {
            return false;
        };
        if !self.share_status.start() {
            tracing::debug!("Share ignored, already sharing");
            return false;
        }
        self.mark_dirty();

        let service = Arc::clone(&self.share_service);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = service.share(&card).await;
            let _ = tx.send(AppMessage::ShareFinished(outcome));
        });
        true
    }
}
