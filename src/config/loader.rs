//! Configuration file loading with precedence handling.

use crate::i18n::Locale;
use crate::model::{SortKey, SortOrder};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "REPOLENS_CONFIG";

/// Environment variable overriding the display locale.
pub const ENV_LOCALE: &str = "REPOLENS_LOCALE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys/values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override holds an unknown value.
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/repolens/config.toml`.
///
/// ```toml
/// locale = "zh"
/// sort_by = "updated_at"
/// sort_order = "asc"
/// language = "Rust"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial display locale (`en` / `zh`).
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Initial sort key.
    #[serde(default)]
    pub sort_by: Option<SortKey>,

    /// Initial sort direction (`asc` / `desc`).
    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    /// Initial language filter.
    #[serde(default)]
    pub language: Option<String>,

    /// Dataset file to load instead of the embedded one.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Display locale.
    pub locale: Locale,
    /// Initial sort key.
    pub sort_by: SortKey,
    /// Initial sort direction.
    pub sort_order: SortOrder,
    /// Initial language filter (empty for none).
    pub language: String,
    /// External dataset, or `None` for the embedded one.
    pub data_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colors disabled.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            sort_by: SortKey::Stars,
            sort_order: SortOrder::Descending,
            language: String::new(),
            data_path: None,
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Overrides taken from command-line flags. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--locale`
    pub locale: Option<Locale>,
    /// `--sort`
    pub sort_by: Option<SortKey>,
    /// `--order`
    pub sort_order: Option<SortOrder>,
    /// `--language`
    pub language: Option<String>,
    /// `--data`
    pub data_path: Option<PathBuf>,
    /// `--log-file`
    pub log_file_path: Option<PathBuf>,
    /// `--no-color`, only when the flag was given.
    pub no_color: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/repolens/repolens.log` on Linux, or the
/// platform's state directory elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("repolens").join("repolens.log")
    } else {
        PathBuf::from("repolens.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/repolens/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("repolens").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `REPOLENS_CONFIG` environment variable
/// 3. Default path `~/.config/repolens/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        locale: config.locale.unwrap_or(defaults.locale),
        sort_by: config.sort_by.unwrap_or(defaults.sort_by),
        sort_order: config.sort_order.unwrap_or(defaults.sort_order),
        language: config.language.unwrap_or(defaults.language),
        data_path: config.data_path.or(defaults.data_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `REPOLENS_LOCALE`: override locale (`en` / `zh`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` if the variable is set to an
/// unknown locale.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(value) = std::env::var(ENV_LOCALE) {
        config.locale = value.parse().map_err(|e: crate::model::ParseValueError| {
            ConfigError::InvalidEnvValue {
                var: ENV_LOCALE,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(sort_by) = cli.sort_by {
        config.sort_by = sort_by;
    }
    if let Some(sort_order) = cli.sort_order {
        config.sort_order = sort_order;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(data_path) = cli.data_path {
        config.data_path = Some(data_path);
    }
    if let Some(log_file_path) = cli.log_file_path {
        config.log_file_path = log_file_path;
    }
    if let Some(no_color) = cli.no_color {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
