//! Mock implementations for testing.
//!
//! These test doubles record every interaction so tests can assert on
//! exactly which side effects happened.
//!
//! # Example
//!
//! ```ignore
//! use mindspoke::adapters::mock::{MockClipboard, MockNativeShare, MockRasterizer};
//!
//! let clipboard = MockClipboard::new();
//! let native = MockNativeShare::unavailable();
//! // ... run a share, then:
//! assert_eq!(clipboard.writes().len(), 1);
//! assert_eq!(native.share_count(), 0);
//! ```

mod http;
mod share;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use share::{MockClipboard, MockNativeShare, MockRasterizer, NativeShareBehavior, RasterBehavior};
