//! Plain-text form of a result, used for native share and clipboard copy.

use crate::models::GenerationResult;

/// Title passed along with a native share.
pub const SHARE_TITLE: &str = "My Journaling Prompt";

/// Compose the share text: the three fields under fixed labels.
pub fn compose_share_text(result: &GenerationResult) -> String {
    format!(
        "Journaling prompt:\n\"{}\"\n\nEncouragement:\n{}\n\nToday's affirmation:\n{}\n\nShared from MindSpoke",
        result.prompt, result.encouragement, result.affirmation
    )
}
