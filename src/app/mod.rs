//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns every piece of session state. Spawned work
//! (generation, share) never touches it directly; it reports back through
//! [`AppMessage`]s that the event loop feeds to [`App::handle_message`].

mod actions;
mod handlers;
mod keys;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::gemini::GeminiClient;
use crate::share::{ShareCard, ShareService};
use crate::state::{FormState, GenerationStore, ShareStatus};

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Generation lifecycle
    pub generation: GenerationStore,
    /// Input form
    pub form: FormState,
    /// Share busy flag, "Copied!" feedback and alert
    pub share_status: ShareStatus,
    /// Card for the current Success result, mounted when it arrives
    pub share_card: Option<ShareCard>,
    /// Provider client (shared across async tasks)
    pub gemini: Arc<GeminiClient>,
    /// Share fallback chain (shared across async tasks)
    pub share_service: Arc<ShareService>,
    /// Tick counter for animations (skeleton shimmer)
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(gemini: Arc<GeminiClient>, share_service: Arc<ShareService>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            generation: GenerationStore::new(),
            form: FormState::new(),
            share_status: ShareStatus::new(),
            share_card: None,
            gemini,
            share_service,
            tick_count: 0,
            needs_redraw: true, // Start with redraw needed
        }
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Generation is in flight; the generate trigger is disabled.
    pub fn is_generating(&self) -> bool {
        self.generation.state().is_loading()
    }

    /// Whether the share trigger should be offered.
    pub fn can_share(&self) -> bool {
        self.share_card.is_some() && !self.share_status.is_busy()
    }

    /// Advance animations and expire timed feedback.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.share_status.expire(now) {
            self.mark_dirty();
        }
        // Skeleton bars pulse while loading.
        if self.is_generating() && self.tick_count % 8 == 0 {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{
        MockClipboard, MockHttpClient, MockNativeShare, MockRasterizer, RasterBehavior,
    };
    use crate::startup::AppConfig;

    pub(crate) struct Harness {
        pub app: App,
        pub http: MockHttpClient,
        pub clipboard: MockClipboard,
        pub native: MockNativeShare,
    }

    pub(crate) fn harness_with(native: MockNativeShare, clipboard: MockClipboard) -> Harness {
        let http = MockHttpClient::new();
        let gemini = GeminiClient::new(Arc::new(http.clone()), &AppConfig::new("test-key"));
        let share = ShareService::new(
            Arc::new(MockRasterizer::new(RasterBehavior::Image)),
            Arc::new(native.clone()),
            Arc::new(clipboard.clone()),
        );
        Harness {
            app: App::new(Arc::new(gemini), Arc::new(share)),
            http,
            clipboard,
            native,
        }
    }

    pub(crate) fn harness() -> Harness {
        harness_with(MockNativeShare::unavailable(), MockClipboard::new())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::harness;
    use super::*;
    use crate::models::GenerationResult;
    use crate::share::COPIED_FEEDBACK;
    use crate::share::ShareOutcome;

    #[test]
    fn test_new_app_is_idle() {
        let h = harness();
        assert!(!h.app.should_quit);
        assert!(h.app.needs_redraw);
        assert!(h.app.share_card.is_none());
        assert!(!h.app.can_share());
        assert!(!h.app.is_generating());
    }

    #[test]
    fn test_tick_expires_copied_feedback() {
        let mut h = harness();
        h.app.share_card = Some(ShareCard::new(GenerationResult::new("p", "e", "a")));
        let t0 = Instant::now();
        h.app.share_status.start();
        h.app.share_status.finish(&ShareOutcome::Copied, t0);
        h.app.needs_redraw = false;

        h.app.tick_at(t0 + COPIED_FEEDBACK);
        assert!(!h.app.share_status.is_copied());
        assert!(h.app.needs_redraw);
    }
}
