//! # Application Configuration
//!
//! This module defines the configuration structure for the `animdna-server` and
//! the logic for loading it. Settings are layered: serde defaults, then an
//! optional YAML file, then environment variables.

use animdna::EnhancerSettings;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "ANIMDNA_CONFIG";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// An explicitly requested configuration file does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for an uploaded request body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// How prompts are enhanced.
    #[serde(default)]
    pub enhancer: EnhancerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
            enhancer: EnhancerSettings::default(),
        }
    }
}

fn default_port() -> u16 {
    9090
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

// Reads a file and substitutes `${VAR}` references with environment values.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Picks the configuration file to read, if any.
///
/// An explicit override or `ANIMDNA_CONFIG` must exist. Otherwise `config.yml`
/// next to this crate is used when present.
fn resolve_config_path(config_path_override: Option<&str>) -> Result<Option<String>, ConfigError> {
    let explicit = config_path_override
        .map(str::to_string)
        .or_else(|| env::var(CONFIG_PATH_VAR).ok().filter(|p| !p.is_empty()));

    if let Some(path) = explicit {
        if !Path::new(&path).exists() {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{path}'."
            )));
        }
        return Ok(Some(path));
    }

    let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
    if Path::new(&default_path).exists() {
        return Ok(Some(default_path));
    }
    Ok(None)
}

/// Loads the application configuration.
///
/// - Defaults come from the serde attributes on [`AppConfig`].
/// - A YAML file (see [`resolve_config_path`]) is layered on top, with
///   `${VAR}` substitution.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `ANIMDNA_...` variables
///   (e.g., `ANIMDNA_ENHANCER__SELECTION=deterministic`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    if let Some(path) = resolve_config_path(config_path_override)? {
        if let Some(content) = read_and_substitute(&path)? {
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
    }

    let settings = builder
        .add_source(Environment::default().try_parsing(true))
        .add_source(
            Environment::with_prefix("ANIMDNA")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
