//! Generation lifecycle.
//!
//! ```text
//! Idle ──begin()──▶ Loading ──resolve(latest)──▶ Success | Failure
//!                      ▲                              │
//!                      └──────────begin()─────────────┘
//! ```
//!
//! Every `begin()` hands out a [`Ticket`]. Only the most recent ticket may
//! resolve the store, so a slow request that finishes after a newer one
//! cannot overwrite it.

use crate::error::GenerationError;
use crate::models::GenerationResult;

/// Identifies one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Exactly one of these is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Success(GenerationResult),
    /// Holds the user-facing message, never raw error text
    Failure(String),
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the current [`GenerationState`] and the ticket counter.
#[derive(Debug, Default)]
pub struct GenerationStore {
    state: GenerationState,
    last_ticket: u64,
}

impl GenerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// The ticket of the attempt that may still resolve, if any.
    pub fn current_ticket(&self) -> Option<Ticket> {
        (self.last_ticket > 0).then_some(Ticket(self.last_ticket))
    }

    /// Start a new attempt: drop any previous result or error and enter
    /// `Loading`. Always succeeds, even while already loading.
    pub fn begin(&mut self) -> Ticket {
        self.last_ticket += 1;
        self.state = GenerationState::Loading;
        tracing::debug!(ticket = self.last_ticket, "Generation started");
        Ticket(self.last_ticket)
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer attempt
    /// has been started since.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> bool {
        if ticket.0 != self.last_ticket {
            tracing::info!(
                ticket = ticket.0,
                latest = self.last_ticket,
                "Ignoring stale generation result"
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => GenerationState::Success(result),
            Err(e) => {
                tracing::error!(error = %e, code = e.error_code(), "Generation failed");
                GenerationState::Failure(e.user_message().to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERATION_FAILED_MESSAGE;

    fn sample() -> GenerationResult {
        GenerationResult::new("p", "e", "a")
    }

    #[test]
    fn test_initial_state_is_idle() {
        let store = GenerationStore::new();
        assert_eq!(store.state(), &GenerationState::Idle);
        assert!(store.current_ticket().is_none());
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut store = GenerationStore::new();
        let t = store.begin();
        assert!(store.resolve(t, Ok(sample())));
        assert!(store.state().result().is_some());

        store.begin();
        assert!(store.state().is_loading());
        assert!(store.state().result().is_none());
    }

    #[test]
    fn test_failure_uses_fixed_message() {
        let mut store = GenerationStore::new();
        let t = store.begin();
        store.resolve(
            t,
            Err(GenerationError::InvalidPayload {
                message: "expected value at line 1".to_string(),
            }),
        );
        assert_eq!(store.state().error(), Some(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn test_stale_ticket_dropped() {
        let mut store = GenerationStore::new();
        let first = store.begin();
        let second = store.begin();
        assert!(second > first);

        assert!(store.resolve(second, Ok(sample())));
        assert!(!store.resolve(first, Err(GenerationError::EmptyResponse)));
        assert_eq!(store.state(), &GenerationState::Success(sample()));
    }

    #[test]
    fn test_resolve_same_ticket_twice_overwrites() {
        let mut store = GenerationStore::new();
        let t = store.begin();
        store.resolve(t, Err(GenerationError::EmptyResponse));
        assert!(store.resolve(t, Ok(sample())));
        assert!(store.state().result().is_some());
    }
}
