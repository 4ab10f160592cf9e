//! `AppConfig::from_env` against the real process environment.
//!
//! These mutate global state, so every test is `#[serial]`.

use std::time::Duration;

use mindspoke::error::ConfigError;
use mindspoke::startup::config::{
    ENV_API_BASE, ENV_API_KEY, ENV_LOG, ENV_MODEL, ENV_SHARE_DIR, ENV_TIMEOUT_SECS,
};
use mindspoke::startup::AppConfig;
use serial_test::serial;

const ALL_VARS: [&str; 6] = [
    ENV_API_KEY,
    ENV_MODEL,
    ENV_API_BASE,
    ENV_TIMEOUT_SECS,
    ENV_SHARE_DIR,
    ENV_LOG,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_key_from_env() {
    clear_env();
    assert_eq!(AppConfig::from_env().unwrap_err(), ConfigError::MissingApiKey);
}

#[test]
#[serial]
fn test_key_and_overrides_from_env() {
    clear_env();
    std::env::set_var(ENV_API_KEY, " env-key ");
    std::env::set_var(ENV_TIMEOUT_SECS, "12");
    std::env::set_var(ENV_API_BASE, "http://127.0.0.1:8080/");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.request_timeout, Duration::from_secs(12));
    assert_eq!(config.api_base, "http://127.0.0.1:8080");

    clear_env();
}

#[test]
#[serial]
fn test_bad_timeout_from_env() {
    clear_env();
    std::env::set_var(ENV_API_KEY, "k");
    std::env::set_var(ENV_TIMEOUT_SECS, "later");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.error_code(), "E_CFG_INVALID");
    assert!(err.to_string().contains(ENV_TIMEOUT_SECS));

    clear_env();
}
