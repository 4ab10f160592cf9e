//! Error taxonomy for MindSpoke.
//!
//! Every adapter translates its raw failures into one of these types before
//! anything reaches UI state:
//!
//! | Error | Raised by | Handling |
//! |-------|-----------|----------|
//! | [`ConfigError`] | startup | Fatal, printed before the TUI starts |
//! | [`GenerationError`] | provider client | Mapped to a fixed friendly message |
//! | [`ShareError`] | share adapter | Absorbed by the fallback chain; only clipboard failure is shown |
//!
//! A user-cancelled native share is not an error at all; see
//! [`crate::share::ShareOutcome::Cancelled`].

mod config;
mod generation;
mod share;

pub use config::ConfigError;
pub use generation::{GenerationError, GENERATION_FAILED_MESSAGE};
pub use share::ShareError;
