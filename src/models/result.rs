//! The provider's answer for one generation.

use serde::{Deserialize, Serialize};

/// A journaling prompt with its encouragement and affirmation.
///
/// Deserialized straight from the provider's structured output; all three
/// fields are required and kept exactly as returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The journaling prompt (at most 30 words by contract, not checked here)
    pub prompt: String,
    /// A short, kind sentence matching the prompt's tone
    pub encouragement: String,
    /// A first-person affirmation for the day
    pub affirmation: String,
}

impl GenerationResult {
    pub fn new(
        prompt: impl Into<String>,
        encouragement: impl Into<String>,
        affirmation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            encouragement: encouragement.into(),
            affirmation: affirmation.into(),
        }
    }
}
