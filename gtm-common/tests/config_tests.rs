//! Configuration resolution tests
//!
//! Tests touching GTM_* environment variables are marked #[serial] so they
//! never run in parallel with each other.

use gtm_common::config::{
    ClientConfig, ConfigResolver, ConfigSource, LoggingConfig, TomlConfig, BASE_URL_ENV_VAR, CONFIG_ENV_VAR,
    DATA_FOLDER_ENV_VAR, PUBLIC_API_KEY_ENV_VAR,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn test_cli_path_wins_over_env() {
    let dir = TempDir::new().unwrap();
    let cli = dir.path().join("cli.toml");
    let from_env = dir.path().join("env.toml");
    std::fs::write(&cli, "port = 6001\n").unwrap();
    std::fs::write(&from_env, "port = 6002\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = ConfigResolver::new(Some(cli.clone())).resolve().unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.port, 6001);
}

#[test]
#[serial]
fn test_env_path_used_without_cli() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gtm-bff.toml");
    std::fs::write(
        &path,
        "public_api_key = \"anon-key\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    env::set_var(CONFIG_ENV_VAR, &path);
    let resolver = ConfigResolver::new(None);
    assert_eq!(resolver.locate(), Some(path.clone()));
    let config = resolver.resolve().unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.public_api_key.as_deref(), Some("anon-key"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.port, 5780);
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    let config = ConfigResolver::new(Some(PathBuf::from("/nonexistent/gtm-bff.toml")))
        .resolve()
        .unwrap();

    assert_eq!(config.port, 5780);
    assert!(config.public_api_key.is_none());
}

#[test]
#[serial]
fn test_resolve_reports_config_source() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("gtm-bff.toml");
    std::fs::write(&present, "port = 6100\n").unwrap();
    let absent = dir.path().join("absent.toml");

    let (config, source) = ConfigResolver::new(Some(present.clone()))
        .resolve_with_source()
        .unwrap();
    assert_eq!(config.port, 6100);
    assert_eq!(source, ConfigSource::File(present));

    let (config, source) = ConfigResolver::new(Some(absent.clone()))
        .resolve_with_source()
        .unwrap();
    assert_eq!(config.port, 5780);
    assert_eq!(source, ConfigSource::MissingFile(absent));
}

#[test]
#[serial]
fn test_log_file_created_with_parent_folders() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("gtm-bff.log");
    let path = dir.path().join("gtm-bff.toml");
    std::fs::write(
        &path,
        format!("[logging]\nfile = {:?}\n", log_path.display().to_string()),
    )
    .unwrap();

    let config = ConfigResolver::new(Some(path)).resolve().unwrap();
    assert_eq!(config.logging.file.as_deref(), Some(log_path.as_path()));

    let file = config.logging.open_log_file().unwrap();
    assert!(file.is_some());
    assert!(log_path.is_file());
}

#[test]
fn test_no_log_file_without_setting() {
    assert!(LoggingConfig::default().open_log_file().unwrap().is_none());
}

#[test]
#[serial]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();

    assert!(ConfigResolver::new(Some(path)).resolve().is_err());
}

#[test]
#[serial]
fn test_database_path_priority() {
    let explicit = TomlConfig {
        database_path: Some(PathBuf::from("/srv/gtm/custom.db")),
        ..TomlConfig::default()
    };
    assert_eq!(explicit.database_path(), PathBuf::from("/srv/gtm/custom.db"));

    env::set_var(DATA_FOLDER_ENV_VAR, "/var/lib/gtm");
    let from_env = TomlConfig::default().database_path();
    env::remove_var(DATA_FOLDER_ENV_VAR);
    assert_eq!(from_env, PathBuf::from("/var/lib/gtm/gtm.db"));

    let fallback = TomlConfig::default().database_path();
    assert!(fallback.ends_with("gtm.db"));
}

#[test]
#[serial]
fn test_client_config_from_env() {
    env::set_var(BASE_URL_ENV_VAR, "https://bff.example.com/");
    env::set_var(PUBLIC_API_KEY_ENV_VAR, "anon-key");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://bff.example.com");
    assert_eq!(config.public_api_key, "anon-key");

    env::remove_var(PUBLIC_API_KEY_ENV_VAR);
    assert!(ClientConfig::from_env().is_err());
    env::remove_var(BASE_URL_ENV_VAR);
}
