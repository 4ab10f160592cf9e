//! Request construction for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::GenerationInput;

/// Sampling temperature. High on purpose: repeated inputs should read differently.
pub const TEMPERATURE: f64 = 0.9;

pub const TOP_P: f64 = 1.0;

/// Fixed persona and rules sent with every request.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a compassionate mental wellness coach from Kenya who creates short, thoughtful journaling prompts that encourage self-reflection and emotional balance. Your tone is gentle and emotionally intelligent.

You will be given a user's mood, time of day, and an optional theme.
You MUST respond with a single journaling prompt, a short, kind sentence of encouragement, and a short first-person affirmation.

Rules for the prompt:
- No more than 30 words.
- Easy to understand.
- Inclusive of Kenyan or African context where it feels natural (e.g., community, nature like the savannah, daily life elements like chai).

Rules for the affirmation:
- One sentence, written in the first person ("I ...").
- Warm and believable, never grandiose.

Example 1:
Input: mood = "stressed", time = "evening", theme = "gratitude"
Output:
{
    "prompt": "What small act of kindness, like sharing a cup of chai, made your day a little better today?",
    "encouragement": "You've done enough for today - even small joys count.",
    "affirmation": "I allow myself to rest and notice the good around me."
}

Example 2:
Input: mood = "hopeful", time = "morning", theme = "focus"
Output:
{
    "prompt": "What one thing, as steady as the morning sun over the plains, will you give your full attention to today?",
    "encouragement": "Stay present - you already have the clarity you need.",
    "affirmation": "I move through my day with calm and steady purpose."
}

Now, create a new, unique journaling prompt, encouragement and affirmation based on the user's input."#;

/// Build the user turn, e.g. `My mood is "Calm", the time is "Morning".`
///
/// The theme clause is appended only when the trimmed theme is non-empty.
pub fn build_user_message(input: &GenerationInput) -> String {
    let theme_clause = input
        .trimmed_theme()
        .map(|theme| format!(", and the theme is \"{}\"", theme))
        .unwrap_or_default();

    format!(
        "My mood is \"{}\", the time is \"{}\"{}.",
        input.mood, input.time_of_day, theme_clause
    )
}

/// Structured-output schema: three required string fields.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prompt": {
                "type": "STRING",
                "description": "The journaling prompt, no more than 30 words. It should be gentle, emotionally intelligent, and easy to understand. Where natural, it can be inclusive of a Kenyan or African context (e.g., community, nature, daily life)."
            },
            "encouragement": {
                "type": "STRING",
                "description": "A short, kind sentence of encouragement that matches the tone of the prompt."
            },
            "affirmation": {
                "type": "STRING",
                "description": "A short first-person affirmation for the day that matches the prompt's theme."
            }
        },
        "required": ["prompt", "encouragement", "affirmation"],
        "propertyOrdering": ["prompt", "encouragement", "affirmation"]
    })
}

/// A single text part of a content turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    pub temperature: f64,
    pub top_p: f64,
}

/// Body of `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_input(input: &GenerationInput) -> Self {
        Self {
            system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
            contents: vec![Content::text(Some("user"), build_user_message(input))],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        }
    }

    /// The templated user message, for logging and tests.
    pub fn user_message(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}
