//! Concrete implementations of the traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ArboardClipboard`] - System clipboard using arboard
//! - [`SystemShare`] - Saves the card and opens it with the OS default handler
//!
//! The card rasterizer lives in [`crate::share::CardRasterizer`] since it
//! is part of the share card itself, not an OS integration.
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with optional delay
//! - [`mock::MockClipboard`] - Records writes, can be told to fail
//! - [`mock::MockNativeShare`] - Scriptable availability and outcome
//! - [`mock::MockRasterizer`] - Returns a fixed image, nothing, or an error

pub mod arboard_clipboard;
pub mod mock;
pub mod reqwest_http;
pub mod system_share;

pub use arboard_clipboard::ArboardClipboard;
pub use reqwest_http::ReqwestHttpClient;
pub use system_share::SystemShare;
