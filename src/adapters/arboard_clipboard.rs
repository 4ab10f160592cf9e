//! System clipboard via arboard.
//!
//! arboard is synchronous, so writes run on the blocking pool. The
//! `Clipboard` handle is kept alive between writes: on X11 the selection is
//! owned by the process and dropping the handle right away can lose it.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ShareError;
use crate::traits::ClipboardWriter;

#[derive(Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_blocking(
        handle: &Mutex<Option<arboard::Clipboard>>,
        text: &str,
    ) -> Result<(), ShareError> {
        let mut guard = handle
            .lock()
            .map_err(|_| ShareError::Clipboard("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ShareError::Clipboard(e.to_string())),
            None => Err(ShareError::Clipboard("clipboard unavailable".to_string())),
        }
    }
}

#[async_trait]
impl ClipboardWriter for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || Self::write_blocking(&handle, &text))
            .await
            .map_err(|e| ShareError::Clipboard(e.to_string()))?
    }
}
