//! Startup: configuration and logging, both settled before the TUI starts.
//!
//! # Components
//!
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - File-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use mindspoke::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env()?; // missing API_KEY is fatal
//! let _log = init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::{default_log_path, init_logging, LogGuard};
