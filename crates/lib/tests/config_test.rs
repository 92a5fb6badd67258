//! # Configuration Loading Tests
//!
//! These tests touch process environment variables, so they run serially.

use anyhow::Result;
use remotejobs::config::get_config;
use remotejobs::{ConfigError, ScraperConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn test_defaults_without_file_or_env() -> Result<()> {
    let config = get_config(None)?;

    assert_eq!(config, ScraperConfig::default());
    assert_eq!(config.api_url, "https://remoteok.com/api");
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.courtesy_delay(), Duration::from_secs(1));

    Ok(())
}

#[test]
#[serial]
fn test_yaml_file_overrides_defaults() -> Result<()> {
    // --- Arrange ---
    let dir = tempdir()?;
    let path = dir.path().join("scraper.yml");
    fs::write(
        &path,
        "api_url: http://localhost:8080/api\nmax_retries: 5\nrate_limit_backoff_ms: 250\n",
    )?;

    // --- Act ---
    let config = get_config(path.to_str())?;

    // --- Assert ---
    assert_eq!(config.api_url, "http://localhost:8080/api");
    assert_eq!(config.max_retries, 5);
    assert_eq!(
        config.retry_policy().rate_limit_wait(2),
        Duration::from_millis(500)
    );
    // Untouched keys keep their defaults.
    assert_eq!(config.base_url, "https://remoteok.com");
    assert_eq!(config.log_file, "scraper.log");

    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file() -> Result<()> {
    // --- Arrange ---
    let dir = tempdir()?;
    let path = dir.path().join("scraper.yml");
    fs::write(&path, "max_retries: 5\ncourtesy_delay_ms: 2000\n")?;
    env::set_var("REMOTEJOBS_MAX_RETRIES", "7");
    env::set_var("REMOTEJOBS_COURTESY_DELAY_MS", "0");

    // --- Act ---
    let result = get_config(path.to_str());
    env::remove_var("REMOTEJOBS_MAX_RETRIES");
    env::remove_var("REMOTEJOBS_COURTESY_DELAY_MS");
    let config = result?;

    // --- Assert ---
    assert_eq!(config.max_retries, 7);
    assert_eq!(config.courtesy_delay(), Duration::ZERO);

    Ok(())
}

#[test]
#[serial]
fn test_missing_config_file_is_reported() {
    let result = get_config(Some("definitely/not/here/scraper.yml"));

    match result {
        Err(ConfigError::NotFound(path)) => assert!(path.contains("scraper.yml")),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}
