//! Data models shared between the form, the provider client and the share card.
//!
//! - [`GenerationInput`] - What the user asked for (mood, time of day, theme)
//! - [`GenerationResult`] - What the provider returned

mod input;
mod result;

pub use input::{GenerationInput, Mood, TimeOfDay, THEME_SUGGESTIONS};
pub use result::GenerationResult;
