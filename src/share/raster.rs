//! [`Rasterizer`] backed by the in-process card renderer.

use async_trait::async_trait;

use super::card::ShareCard;
use crate::error::ShareError;
use crate::traits::{Rasterizer, ShareImage};

/// Renders the card to PNG on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRasterizer;

impl CardRasterizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Rasterizer for CardRasterizer {
    async fn rasterize(&self, card: &ShareCard) -> Result<Option<ShareImage>, ShareError> {
        let card = card.clone();
        let (width, height, file_name) = (card.width(), card.height(), card.file_name());

        let bytes = tokio::task::spawn_blocking(move || card.to_png())
            .await
            .map_err(|e| ShareError::Rasterize(format!("render task failed: {}", e)))??;

        if bytes.is_empty() {
            return Ok(None);
        }

        Ok(Some(ShareImage {
            bytes,
            mime: "image/png",
            file_name,
            width,
            height,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationResult;

    #[tokio::test]
    async fn test_rasterize_produces_png() {
        let card = ShareCard::new(GenerationResult::new("P?", "E.", "A."));
        let image = CardRasterizer::new().rasterize(&card).await.unwrap().unwrap();
        assert_eq!(image.mime, "image/png");
        assert_eq!((image.width, image.height), (1080, 1080));
        assert_eq!(image.file_name, card.file_name());
        assert!(image.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
