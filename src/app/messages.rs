//! AppMessage enum for async communication within the application.

use crate::error::GenerationError;
use crate::models::GenerationResult;
use crate::share::ShareOutcome;
use crate::state::Ticket;

/// Messages sent back to the UI task by spawned work.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A generation request finished (possibly a stale one)
    GenerationFinished {
        ticket: Ticket,
        result: Result<GenerationResult, GenerationError>,
    },
    /// A share attempt finished
    ShareFinished(ShareOutcome),
}
