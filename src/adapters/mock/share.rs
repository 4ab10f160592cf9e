//! Mock share collaborators.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ShareError;
use crate::share::ShareCard;
use crate::traits::{
    ClipboardWriter, NativeShare, NativeShareError, Rasterizer, ShareImage, SharePayload,
};

/// Records clipboard writes; optionally fails every write.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes all fail with `reason`.
    pub fn failing(reason: &str) -> Self {
        let clipboard = Self::default();
        *clipboard.failure.lock().unwrap() = Some(reason.to_string());
        clipboard
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardWriter for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(ShareError::Clipboard(reason));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// What [`MockNativeShare::share`] does when called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeShareBehavior {
    Succeed,
    Cancel,
    Fail(String),
}

/// Scriptable native share.
#[derive(Debug, Clone)]
pub struct MockNativeShare {
    available: bool,
    accepts_files: bool,
    behavior: NativeShareBehavior,
    shared: Arc<Mutex<Vec<SharePayload>>>,
    attempts: Arc<AtomicUsize>,
}

impl MockNativeShare {
    /// Available, accepts files, succeeds.
    pub fn new() -> Self {
        Self {
            available: true,
            accepts_files: true,
            behavior: NativeShareBehavior::Succeed,
            shared: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// No share capability at all.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn rejecting_files(mut self) -> Self {
        self.accepts_files = false;
        self
    }

    pub fn with_behavior(mut self, behavior: NativeShareBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Payloads that were shared successfully.
    pub fn shared(&self) -> Vec<SharePayload> {
        self.shared.lock().unwrap().clone()
    }

    /// Number of `share` calls, successful or not.
    pub fn share_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockNativeShare {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeShare for MockNativeShare {
    fn is_available(&self) -> bool {
        self.available
    }

    fn can_share(&self, _payload: &SharePayload) -> bool {
        self.accepts_files
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            NativeShareBehavior::Succeed => {
                self.shared.lock().unwrap().push(payload.clone());
                Ok(())
            }
            NativeShareBehavior::Cancel => Err(NativeShareError::Cancelled),
            NativeShareBehavior::Fail(reason) => Err(NativeShareError::Failed(reason.clone())),
        }
    }
}

/// What [`MockRasterizer::rasterize`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterBehavior {
    /// A tiny fake PNG
    Image,
    /// `Ok(None)`
    Nothing,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct MockRasterizer {
    behavior: RasterBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockRasterizer {
    pub fn new(behavior: RasterBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Rasterizer for MockRasterizer {
    async fn rasterize(&self, card: &ShareCard) -> Result<Option<ShareImage>, ShareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            RasterBehavior::Image => Ok(Some(ShareImage {
                bytes: vec![0x89, b'P', b'N', b'G'],
                mime: "image/png",
                file_name: "mindspoke-test.png".to_string(),
                width: card.width(),
                height: card.height(),
            })),
            RasterBehavior::Nothing => Ok(None),
            RasterBehavior::Error(reason) => Err(ShareError::Rasterize(reason.clone())),
        }
    }
}
