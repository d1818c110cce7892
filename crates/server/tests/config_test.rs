//! # Configuration Tests
//!
//! Covers the layering in `get_config`: serde defaults, then a YAML file with
//! `${VAR}` substitution, then environment variables. Every test touches the
//! process environment, so they run serially.

use animdna::SelectionMode;
use animdna_server::{
    config::{get_config, ConfigError, CONFIG_PATH_VAR},
    state::build_app_state,
};
use anyhow::Result;
use serial_test::serial;
use std::{env, io::Write};
use tempfile::NamedTempFile;

/// Clears every environment variable `get_config` reads.
fn clear_env_vars() {
    env::remove_var("PORT");
    env::remove_var("MAX_UPLOAD_BYTES");
    env::remove_var(CONFIG_PATH_VAR);
    env::remove_var("ANIMDNA_PORT");
    env::remove_var("ANIMDNA_ENHANCER__SELECTION");
    env::remove_var("ANIMDNA_ENHANCER__PHRASES_PER_CATEGORY");
    env::remove_var("ANIMDNA_ENHANCER__SEPARATOR");
    env::remove_var("TEST_ANIMDNA_SEPARATOR");
}

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
#[serial]
fn test_get_config_defaults() -> Result<()> {
    clear_env_vars();

    let config = get_config(None)?;

    assert_eq!(config.port, 9090);
    assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.enhancer.selection, SelectionMode::Random);
    assert_eq!(config.enhancer.phrases_per_category, 1);
    assert_eq!(config.enhancer.separator, ", ");
    Ok(())
}

#[test]
#[serial]
fn test_get_config_from_yaml_file() -> Result<()> {
    clear_env_vars();
    let file = write_config(
        "port: 8181\nmax_upload_bytes: 2048\nenhancer:\n  selection: deterministic\n  phrases_per_category: 3\n  separator: \" | \"\n",
    )?;

    let config = get_config(file.path().to_str())?;

    assert_eq!(config.port, 8181);
    assert_eq!(config.max_upload_bytes, 2048);
    assert_eq!(config.enhancer.selection, SelectionMode::Deterministic);
    assert_eq!(config.enhancer.phrases_per_category, 3);
    assert_eq!(config.enhancer.separator, " | ");
    Ok(())
}

#[test]
#[serial]
fn test_get_config_path_from_env_var() -> Result<()> {
    clear_env_vars();
    let file = write_config("port: 7070\n")?;
    env::set_var(CONFIG_PATH_VAR, file.path());

    let config = get_config(None)?;

    assert_eq!(config.port, 7070);
    clear_env_vars();
    Ok(())
}

#[test]
#[serial]
fn test_yaml_substitutes_environment_references() -> Result<()> {
    clear_env_vars();
    env::set_var("TEST_ANIMDNA_SEPARATOR", " ~ ");
    let file = write_config("enhancer:\n  separator: \"${TEST_ANIMDNA_SEPARATOR}\"\n")?;

    let config = get_config(file.path().to_str())?;

    assert_eq!(config.enhancer.separator, " ~ ");
    clear_env_vars();
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_yaml() -> Result<()> {
    clear_env_vars();
    let file = write_config("port: 8181\nenhancer:\n  phrases_per_category: 2\n")?;
    env::set_var("PORT", "9999");
    env::set_var("ANIMDNA_ENHANCER__SELECTION", "deterministic");
    env::set_var("ANIMDNA_ENHANCER__PHRASES_PER_CATEGORY", "4");

    let config = get_config(file.path().to_str())?;

    assert_eq!(config.port, 9999);
    assert_eq!(config.enhancer.selection, SelectionMode::Deterministic);
    assert_eq!(config.enhancer.phrases_per_category, 4);
    clear_env_vars();
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_an_error() {
    clear_env_vars();

    let result = get_config(Some("/definitely/not/here/animdna.yml"));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_unknown_selection_mode_is_rejected() -> Result<()> {
    clear_env_vars();
    let file = write_config("enhancer:\n  selection: sometimes\n")?;

    let result = get_config(file.path().to_str());

    assert!(matches!(result, Err(ConfigError::General(_))));
    Ok(())
}

#[test]
#[serial]
fn test_invalid_enhancer_settings_fail_at_startup() -> Result<()> {
    clear_env_vars();
    let file = write_config("enhancer:\n  phrases_per_category: 9\n")?;

    // Loading succeeds; validation happens when the state is built.
    let config = get_config(file.path().to_str())?;
    assert!(build_app_state(config).is_err());
    Ok(())
}
