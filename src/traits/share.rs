//! Share/export capability traits.
//!
//! The share adapter only talks to these traits; the concrete OS
//! integrations live in [`crate::adapters`].

use async_trait::async_trait;
use thiserror::Error;

use crate::error::ShareError;
use crate::share::ShareCard;

/// An encoded image ready to hand to the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareImage {
    /// Encoded bytes
    pub bytes: Vec<u8>,
    /// MIME type of `bytes` (e.g. `image/png`)
    pub mime: &'static str,
    /// Suggested file name including extension
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Everything passed to a native share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub image: ShareImage,
}

/// Why a native share did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeShareError {
    /// The user dismissed the share sheet. Not a failure.
    #[error("share cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

/// Turns a share card into an image.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Render `card`.
    ///
    /// `Ok(None)` means nothing was produced without a hard error, which the
    /// share adapter treats the same as a failure: it falls back to text.
    async fn rasterize(&self, card: &ShareCard) -> Result<Option<ShareImage>, ShareError>;
}

/// OS-level share of text plus a file.
#[async_trait]
pub trait NativeShare: Send + Sync {
    /// Whether any share mechanism exists on this system.
    fn is_available(&self) -> bool;

    /// Whether the mechanism would accept this payload's file.
    fn can_share(&self, payload: &SharePayload) -> bool;

    /// Hand the payload to the OS.
    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError>;
}

/// Plain-text clipboard.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ShareError>;
}
