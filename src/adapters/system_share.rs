//! Native share for desktop terminals.
//!
//! A terminal has no share sheet, so "sharing" saves the card image and its
//! text side by side in the user's pictures folder and opens the image with
//! the OS default handler (via `open`), from where the user can send it on.

use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::traits::{NativeShare, NativeShareError, SharePayload};

/// Largest image we hand to the OS.
const MAX_SHARE_BYTES: usize = 10 * 1024 * 1024;

/// MIME types the opener is known to handle.
const SHAREABLE_MIME_TYPES: &[&str] = &["image/png"];

type Opener = Box<dyn Fn(&Path) -> io::Result<()> + Send + Sync>;

pub struct SystemShare {
    dir: Option<PathBuf>,
    desktop: bool,
    opener: Opener,
}

impl SystemShare {
    /// Share into `dir`, or the pictures/downloads folder when `None`.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir: dir.or_else(default_share_dir),
            desktop: detect_desktop(),
            opener: Box::new(|path: &Path| open::that(path)),
        }
    }

    /// Override desktop detection.
    pub fn with_desktop(mut self, desktop: bool) -> Self {
        self.desktop = desktop;
        self
    }

    /// Replace the function that opens the saved image.
    pub fn with_opener<F>(mut self, opener: F) -> Self
    where
        F: Fn(&Path) -> io::Result<()> + Send + Sync + 'static,
    {
        self.opener = Box::new(opener);
        self
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn save(&self, dir: &Path, payload: &SharePayload) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let image_path = dir.join(&payload.image.file_name);
        fs::write(&image_path, &payload.image.bytes)?;

        let text_path = image_path.with_extension("txt");
        fs::write(&text_path, format!("{}\n\n{}\n", payload.title, payload.text))?;

        Ok(image_path)
    }
}

fn default_share_dir() -> Option<PathBuf> {
    dirs::picture_dir()
        .or_else(dirs::download_dir)
        .map(|dir| dir.join("MindSpoke"))
}

/// Whether something can display the opened image.
fn detect_desktop() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[async_trait]
impl NativeShare for SystemShare {
    fn is_available(&self) -> bool {
        self.desktop && self.dir.is_some()
    }

    fn can_share(&self, payload: &SharePayload) -> bool {
        let image = &payload.image;
        SHAREABLE_MIME_TYPES.contains(&image.mime)
            && !image.bytes.is_empty()
            && image.bytes.len() <= MAX_SHARE_BYTES
            && !image.file_name.contains(['/', '\\'])
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
        let dir = self
            .dir
            .as_deref()
            .ok_or_else(|| NativeShareError::Failed("no share directory".to_string()))?;

        let image_path = self
            .save(dir, payload)
            .map_err(|e| NativeShareError::Failed(format!("saving share files: {}", e)))?;
        tracing::info!("Saved share card to {}", image_path.display());

        (self.opener)(&image_path)
            .map_err(|e| NativeShareError::Failed(format!("opening {}: {}", image_path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ShareImage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn payload(bytes: Vec<u8>, mime: &'static str, file_name: &str) -> SharePayload {
        SharePayload {
            title: "My Journaling Prompt".to_string(),
            text: "share text".to_string(),
            image: ShareImage {
                bytes,
                mime,
                file_name: file_name.to_string(),
                width: 1080,
                height: 1080,
            },
        }
    }

    #[test]
    fn test_unavailable_without_desktop() {
        let share = SystemShare::new(Some(PathBuf::from("/tmp/x"))).with_desktop(false);
        assert!(!share.is_available());
    }

    #[test]
    fn test_can_share_rules() {
        let share = SystemShare::new(Some(PathBuf::from("/tmp/x")));
        assert!(share.can_share(&payload(vec![1, 2, 3], "image/png", "card.png")));
        assert!(!share.can_share(&payload(vec![], "image/png", "card.png")));
        assert!(!share.can_share(&payload(vec![1], "image/webp", "card.webp")));
        assert!(!share.can_share(&payload(vec![1], "image/png", "../card.png")));
        assert!(!share.can_share(&payload(
            vec![0; MAX_SHARE_BYTES + 1],
            "image/png",
            "card.png"
        )));
    }

    #[tokio::test]
    async fn test_share_saves_files_and_opens_image() {
        let dir = tempfile::tempdir().unwrap();
        let opened = Arc::new(AtomicUsize::new(0));
        let opened_clone = Arc::clone(&opened);

        let share = SystemShare::new(Some(dir.path().to_path_buf()))
            .with_desktop(true)
            .with_opener(move |path| {
                assert!(path.ends_with("card.png"));
                opened_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        share
            .share(&payload(vec![9, 9], "image/png", "card.png"))
            .await
            .unwrap();

        assert_eq!(opened.load(Ordering::SeqCst), 1);
        assert_eq!(fs::read(dir.path().join("card.png")).unwrap(), vec![9, 9]);
        let text = fs::read_to_string(dir.path().join("card.txt")).unwrap();
        assert!(text.starts_with("My Journaling Prompt"));
        assert!(text.contains("share text"));
    }

    #[tokio::test]
    async fn test_share_open_failure_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let share = SystemShare::new(Some(dir.path().to_path_buf()))
            .with_opener(|_| Err(io::Error::new(io::ErrorKind::NotFound, "no handler")));

        let err = share
            .share(&payload(vec![1], "image/png", "card.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, NativeShareError::Failed(msg) if msg.contains("no handler")));
    }
}
