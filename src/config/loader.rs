//! Configuration file loading with precedence handling.

use crate::carousel::CarouselOptions;
use crate::promo::default_promo_state_path;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LOOPREEL_CONFIG";

/// Environment variable overriding the auto-advance cadence in milliseconds.
pub const CADENCE_ENV_VAR: &str = "LOOPREEL_CADENCE_MS";

/// Largest accepted `clone_count`.
pub const MAX_CLONE_COUNT: usize = 64;

/// Largest accepted `promo_duration_secs` (30 days).
pub const MAX_PROMO_DURATION_SECS: u64 = 30 * 24 * 60 * 60;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting is outside its accepted range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as spelled in the config file.
        field: &'static str,
        /// What is accepted.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything missing falls back to the defaults in
/// [`ResolvedConfig::default`]. Lives at `~/.config/loopreel/config.toml`.
///
/// ```toml
/// cadence_ms = 4000
/// resume_delay_ms = 8000
/// clone_count = 2
/// promo_enabled = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Auto-advance period.
    #[serde(default)]
    pub cadence_ms: Option<u64>,

    /// Quiet period after user interaction before auto-advance resumes.
    #[serde(default)]
    pub resume_delay_ms: Option<u64>,

    /// How long a smooth scroll takes to settle.
    #[serde(default)]
    pub settle_ms: Option<u64>,

    /// Clones on each side of the track.
    #[serde(default)]
    pub clone_count: Option<usize>,

    /// Scroll distance per column of pointer movement while dragging.
    #[serde(default)]
    pub drag_sensitivity: Option<f64>,

    /// Gap between cards in columns.
    #[serde(default)]
    pub item_gap: Option<u16>,

    /// Start with auto-advance enabled.
    #[serde(default)]
    pub autoplay: Option<bool>,

    /// Show the promo countdown.
    #[serde(default)]
    pub promo_enabled: Option<bool>,

    /// Length of one promo period in seconds.
    #[serde(default)]
    pub promo_duration_secs: Option<u64>,

    /// Where the promo expiry is persisted.
    #[serde(default)]
    pub promo_state_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Auto-advance period.
    pub cadence: Duration,
    /// Resume delay after interaction.
    pub resume_delay: Duration,
    /// Smooth scroll settle time.
    pub settle: Duration,
    /// Clones per side.
    pub clone_count: usize,
    /// Drag multiplier.
    pub drag_sensitivity: f64,
    /// Gap between cards in columns.
    pub item_gap: u16,
    /// Auto-advance on at startup.
    pub autoplay: bool,
    /// Promo countdown visible.
    pub promo_enabled: bool,
    /// Promo period length.
    pub promo_duration: Duration,
    /// Promo state file.
    pub promo_state_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cadence: Duration::from_millis(3000),
            resume_delay: Duration::from_millis(5000),
            settle: Duration::from_millis(500),
            clone_count: 3,
            drag_sensitivity: 2.0,
            item_gap: 2,
            autoplay: true,
            promo_enabled: true,
            promo_duration: Duration::from_secs(3600),
            promo_state_path: default_promo_state_path(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Carousel tuning derived from this config.
    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            cadence: self.cadence,
            resume_delay: self.resume_delay,
            settle: self.settle,
            clone_count: self.clone_count,
            drag_sensitivity: self.drag_sensitivity,
            gap: f64::from(self.item_gap),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/loopreel/loopreel.log` on Linux, the platform
/// equivalent elsewhere, or `loopreel.log` in the working directory if no
/// state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("loopreel").join("loopreel.log")
    } else {
        PathBuf::from("loopreel.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

/// Resolve default config file path: `~/.config/loopreel/config.toml` on Linux.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("loopreel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOOPREEL_CONFIG` environment variable
/// 3. Default path `~/.config/loopreel/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!(
                "{CONFIG_ENV_VAR} is set but empty"
            )));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `LOOPREEL_CADENCE_MS`. Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CADENCE_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.cadence = Duration::from_millis(ms),
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", CADENCE_ENV_VAR),
        }
    }

    config
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
        cadence: config
            .cadence_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.cadence),
        resume_delay: config
            .resume_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.resume_delay),
        settle: config
            .settle_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.settle),
        clone_count: config.clone_count.unwrap_or(defaults.clone_count),
        drag_sensitivity: config.drag_sensitivity.unwrap_or(defaults.drag_sensitivity),
        item_gap: config.item_gap.unwrap_or(defaults.item_gap),
        autoplay: config.autoplay.unwrap_or(defaults.autoplay),
        promo_enabled: config.promo_enabled.unwrap_or(defaults.promo_enabled),
        promo_duration: config
            .promo_duration_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.promo_duration),
        promo_state_path: config.promo_state_path.unwrap_or(defaults.promo_state_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Flags explicitly set on the command line.
///
/// `None`/`false` means "not given"; the lower layers win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--cadence-ms`
    pub cadence_ms: Option<u64>,
    /// `--no-autoplay`
    pub no_autoplay: bool,
    /// `--no-promo`
    pub no_promo: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(ms) = cli.cadence_ms {
        config.cadence = Duration::from_millis(ms);
    }

    if cli.no_autoplay {
        config.autoplay = false;
    }

    if cli.no_promo {
        config.promo_enabled = false;
    }

    config
}

/// Reject settings the carousel or the promo countdown cannot run with.
///
/// Runs on the fully merged config so values from every layer are checked.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming the first offending setting.
pub fn validate_config(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.cadence.is_zero() {
        return Err(ConfigError::InvalidValue {
            field: "cadence_ms",
            reason: "must be at least 1".to_string(),
        });
    }

    if config.clone_count > MAX_CLONE_COUNT {
        return Err(ConfigError::InvalidValue {
            field: "clone_count",
            reason: format!("must be at most {MAX_CLONE_COUNT}, got {}", config.clone_count),
        });
    }

    if !config.drag_sensitivity.is_finite() || config.drag_sensitivity <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "drag_sensitivity",
            reason: format!("must be a positive number, got {}", config.drag_sensitivity),
        });
    }

    let promo_secs = config.promo_duration.as_secs();
    if !(1..=MAX_PROMO_DURATION_SECS).contains(&promo_secs) {
        return Err(ConfigError::InvalidValue {
            field: "promo_duration_secs",
            reason: format!("must be between 1 and {MAX_PROMO_DURATION_SECS}, got {promo_secs}"),
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
