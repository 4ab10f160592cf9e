//! Application state management
//!
//! State containers for the TUI:
//! - GenerationStore: the generation lifecycle and ticket counter
//! - FormState: mood, time of day, theme and focus
//! - ShareStatus: share busy flag, "Copied!" feedback and alert

pub mod form;
pub mod generation;
pub mod share;

pub use form::{FormFocus, FormState};
pub use generation::{GenerationState, GenerationStore, Ticket};
pub use share::ShareStatus;
