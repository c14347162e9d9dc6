use super::*;

use std::sync::{Mutex, PoisonError};

// =============================================================================
// from_env — env manipulation requires unsafe in edition 2024, and tests in
// one binary share the environment, so every test takes ENV_LOCK first.
// =============================================================================

static ENV_LOCK: Mutex<()> = Mutex::new(());

unsafe fn clear_campus_env() {
    unsafe {
        std::env::remove_var("CAMPUS_API_URL");
        std::env::remove_var("CAMPUS_TIMEOUT_MS");
        std::env::remove_var("CAMPUS_TOKEN_FILE");
    }
}

#[test]
fn from_env_defaults_when_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe { clear_campus_env() };

    let config = ClientConfig::from_env();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    assert!(config.credential_path.is_none());
}

#[test]
fn from_env_reads_all_values() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        clear_campus_env();
        std::env::set_var("CAMPUS_API_URL", "https://api.campus.example");
        std::env::set_var("CAMPUS_TIMEOUT_MS", "250");
        std::env::set_var("CAMPUS_TOKEN_FILE", "/tmp/campus-token");
    }

    let config = ClientConfig::from_env();
    assert_eq!(config.base_url, "https://api.campus.example");
    assert_eq!(config.timeout, Duration::from_millis(250));
    assert_eq!(config.credential_path, Some(PathBuf::from("/tmp/campus-token")));

    unsafe { clear_campus_env() };
}

#[test]
fn from_env_invalid_timeout_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        clear_campus_env();
        std::env::set_var("CAMPUS_TIMEOUT_MS", "soon");
    }

    let config = ClientConfig::from_env();
    assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));

    unsafe { clear_campus_env() };
}

#[test]
fn from_env_trims_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        clear_campus_env();
        std::env::set_var("CAMPUS_API_URL", "http://localhost:8000/");
    }

    let config = ClientConfig::from_env();
    assert_eq!(config.base_url, "http://localhost:8000");

    unsafe { clear_campus_env() };
}

// =============================================================================
// Builders
// =============================================================================

#[test]
fn new_trims_trailing_slash() {
    let config = ClientConfig::new("http://localhost:8000///");
    assert_eq!(config.base_url, "http://localhost:8000");
}

#[test]
fn with_timeout_overrides_default() {
    let config = ClientConfig::new("http://localhost:8000").with_timeout(Duration::from_millis(50));
    assert_eq!(config.timeout, Duration::from_millis(50));
}

#[test]
fn with_credential_path_sets_path() {
    let config =
        ClientConfig::new("http://localhost:8000").with_credential_path(PathBuf::from("/tmp/t"));
    assert_eq!(config.credential_path, Some(PathBuf::from("/tmp/t")));
}
