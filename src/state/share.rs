//! UI-side state of the share button.

use std::time::{Duration, Instant};

use crate::share::{ShareOutcome, COPIED_FEEDBACK};

/// Busy flag, "Copied!" confirmation and the blocking alert.
#[derive(Debug, Clone, Default)]
pub struct ShareStatus {
    busy: bool,
    copied_at: Option<Instant>,
    alert: Option<String>,
}

impl ShareStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark a share as in progress. Returns `false` if one already is.
    pub fn start(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Record the outcome of the share started with [`ShareStatus::start`].
    pub fn finish(&mut self, outcome: &ShareOutcome, now: Instant) {
        self.busy = false;
        match outcome {
            ShareOutcome::Copied => self.copied_at = Some(now),
            ShareOutcome::Failed(err) => self.alert = Some(err.user_message()),
            ShareOutcome::Shared | ShareOutcome::Cancelled => {}
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Clear "Copied!" once it has been shown long enough.
    ///
    /// Returns `true` when the label changed and needs a redraw.
    pub fn expire(&mut self, now: Instant) -> bool {
        self.expire_after(now, COPIED_FEEDBACK)
    }

    fn expire_after(&mut self, now: Instant, ttl: Duration) -> bool {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) >= ttl => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Forget any feedback from a previous result.
    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}
