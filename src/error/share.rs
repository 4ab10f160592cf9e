//! Share/export failures.

use thiserror::Error;

/// Failure of one step in the share fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The card could not be turned into an image.
    #[error("Failed to render share image: {0}")]
    Rasterize(String),

    /// The OS share mechanism rejected or failed the hand-off.
    #[error("Native share failed: {0}")]
    NativeShare(String),

    /// Writing the share text to the clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ShareError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ShareError::Rasterize(_) => "E_SHARE_RASTER",
            ShareError::NativeShare(_) => "E_SHARE_NATIVE",
            ShareError::Clipboard(_) => "E_SHARE_CLIPBOARD",
        }
    }

    /// Text for the blocking alert shown when every fallback failed.
    pub fn user_message(&self) -> String {
        format!("Could not share or copy your prompt.\n\n{}", self)
    }
}
