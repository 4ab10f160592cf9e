//! Share/export: rasterize the card, try a native share, fall back to the
//! clipboard.
//!
//! [`ShareService::share`] performs exactly one of four things per call:
//! a native share, a clipboard write, a silent no-op (user cancelled), or a
//! failure the UI must surface as an alert.

pub mod card;
pub mod raster;
pub mod text;

use std::sync::Arc;
use std::time::Duration;

pub use card::{ShareCard, CARD_SIZE};
pub use raster::CardRasterizer;
pub use text::{compose_share_text, SHARE_TITLE};

use crate::error::ShareError;
use crate::traits::{ClipboardWriter, NativeShare, NativeShareError, Rasterizer, SharePayload};

/// How long the "Copied!" confirmation stays visible.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(2500);

/// Result of one share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share mechanism
    Shared,
    /// Share text written to the clipboard
    Copied,
    /// User dismissed the native share; nothing to show
    Cancelled,
    /// Clipboard fallback failed too
    Failed(ShareError),
}

/// Runs the share fallback chain against its collaborators.
#[derive(Clone)]
pub struct ShareService {
    rasterizer: Arc<dyn Rasterizer>,
    native: Arc<dyn NativeShare>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl ShareService {
    pub fn new(
        rasterizer: Arc<dyn Rasterizer>,
        native: Arc<dyn NativeShare>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            rasterizer,
            native,
            clipboard,
        }
    }

    pub async fn share(&self, card: &ShareCard) -> ShareOutcome {
        let text = card.share_text();

        let image = match self.rasterizer.rasterize(card).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "Card rasterization failed");
                None
            }
        };

        if let Some(image) = image {
            let payload = SharePayload {
                title: SHARE_TITLE.to_string(),
                text: text.clone(),
                image,
            };

            if !self.native.is_available() {
                tracing::debug!("Native share unavailable, copying to clipboard");
            } else if !self.native.can_share(&payload) {
                tracing::debug!(file = %payload.image.file_name, "Native share declined file");
            } else {
                match self.native.share(&payload).await {
                    Ok(()) => {
                        tracing::info!(file = %payload.image.file_name, "Shared card");
                        return ShareOutcome::Shared;
                    }
                    Err(NativeShareError::Cancelled) => {
                        tracing::debug!("Share cancelled by user");
                        return ShareOutcome::Cancelled;
                    }
                    Err(NativeShareError::Failed(reason)) => {
                        let err = ShareError::NativeShare(reason);
                        tracing::warn!(error = %err, "Native share failed, falling back to clipboard");
                    }
                }
            }
        } else {
            tracing::debug!("No card image, copying to clipboard");
        }

        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::info!("Copied share text to clipboard");
                ShareOutcome::Copied
            }
            Err(e) => {
                tracing::error!(error = %e, code = e.error_code(), "Clipboard copy failed");
                ShareOutcome::Failed(e)
            }
        }
    }
}

impl std::fmt::Debug for ShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareService").finish_non_exhaustive()
    }
}
