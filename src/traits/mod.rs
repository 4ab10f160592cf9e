//! Trait abstractions for dependency injection and testability.
//!
//! Everything that leaves the process goes through one of these traits so
//! tests can substitute the in-crate mocks from [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`HttpClient`] - JSON POST to the generative-AI provider
//! - [`Rasterizer`] - Share card to image
//! - [`NativeShare`] - OS-level share of text plus an image file
//! - [`ClipboardWriter`] - Plain-text clipboard write

pub mod http;
pub mod share;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use share::{ClipboardWriter, NativeShare, NativeShareError, Rasterizer, ShareImage, SharePayload};
