//! TOML Configuration File Support
//!
//! Settings for a visualizer session, loaded from
//! `$XDG_CONFIG_HOME/sortviz/sortviz.toml` (typically
//! `~/.config/sortviz/sortviz.toml`).
//!
//! # Configuration Priority
//!
//! Values are applied with the following priority (highest first):
//! 1. CLI arguments, via [`ConfigOverrides`]
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [sort]
//! algorithm = "heap"
//! order = "descending"
//! step_interval_ms = 30
//!
//! [data]
//! bars = 80
//! min_value = 0
//! max_value = 100
//! shape = "nearly-sorted"
//! seed = 1234
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::AlgorithmKind;
use crate::dataset::{DatasetShape, DatasetSpec};
use crate::error::SortError;
use crate::order::SortOrder;

/// Upper bound on the number of bars
pub const MAX_BARS: usize = 1000;

/// Default pause between two steps
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 50;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A value could not be turned into a sort setting
    #[error(transparent)]
    Invalid(#[from] SortError),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[sort]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortToml {
    pub algorithm: Option<AlgorithmKind>,
    pub order: Option<SortOrder>,
    /// Pause between steps in milliseconds
    pub step_interval_ms: Option<u64>,
}

/// `[data]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataToml {
    /// Number of bars
    pub bars: Option<usize>,
    pub min_value: Option<u32>,
    pub max_value: Option<u32>,
    pub shape: Option<DatasetShape>,
    /// Fixed seed for reproducible datasets
    pub seed: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortvizToml {
    pub sort: SortToml,
    pub data: DataToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved settings for a visualizer session
#[derive(Clone, Debug)]
pub struct VisualizerConfig {
    /// Algorithm selected at startup
    pub algorithm: AlgorithmKind,
    /// Order flag selected at startup
    pub order: SortOrder,
    /// Dataset to generate
    pub dataset: DatasetSpec,
    /// Seed for dataset generation (None = fresh entropy each time)
    pub seed: Option<u64>,
    /// Pause between two steps
    pub step_interval: Duration,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::default(),
            order: SortOrder::default(),
            dataset: DatasetSpec::default(),
            seed: None,
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl VisualizerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the highest-priority source that contributed a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty value range,
    /// a zero step interval, or more than [`MAX_BARS`] bars.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.min_value > self.dataset.max_value {
            return Err(ConfigError::ValidationError(format!(
                "min_value ({}) must not exceed max_value ({})",
                self.dataset.min_value, self.dataset.max_value
            )));
        }
        if self.step_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "step_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.dataset.count > MAX_BARS {
            return Err(ConfigError::ValidationError(format!(
                "bars ({}) exceeds the maximum of {}",
                self.dataset.count, MAX_BARS
            )));
        }
        Ok(())
    }

    /// Generate the dataset this configuration describes
    ///
    /// Uses the configured seed when present, fresh entropy otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the value range is empty.
    pub fn generate_data(&self) -> Result<Vec<u32>, ConfigError> {
        let values = match self.seed {
            Some(seed) => self.dataset.generate_with_seed(seed)?,
            None => self.dataset.generate_random()?,
        };
        Ok(values)
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/sortviz/sortviz.toml` or
/// `~/.config/sortviz/sortviz.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sortviz").join("sortviz.toml"))
}

/// Load configuration from the default path and the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config() -> Result<VisualizerConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the environment
///
/// A missing file is not an error; defaults are used instead.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<VisualizerConfig, ConfigError> {
    let mut config = load_file_config(path.as_deref())?;
    apply_env_config(&mut config);
    Ok(config)
}

/// Load defaults plus the TOML file only, ignoring the environment
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_file_config(path: Option<&Path>) -> Result<VisualizerConfig, ConfigError> {
    let mut config = VisualizerConfig::default();

    if let Some(config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;

            let toml_config: SortvizToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.to_path_buf());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut VisualizerConfig, toml: &SortvizToml) {
    if let Some(algorithm) = toml.sort.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(order) = toml.sort.order {
        config.order = order;
    }
    if let Some(ms) = toml.sort.step_interval_ms {
        config.step_interval = Duration::from_millis(ms);
    }

    if let Some(bars) = toml.data.bars {
        config.dataset.count = bars;
    }
    if let Some(min) = toml.data.min_value {
        config.dataset.min_value = min;
    }
    if let Some(max) = toml.data.max_value {
        config.dataset.max_value = max;
    }
    if let Some(shape) = toml.data.shape {
        config.dataset.shape = shape;
    }
    if toml.data.seed.is_some() {
        config.seed = toml.data.seed;
    }
}

/// Apply environment variable overrides to the config
///
/// Environment variables:
/// - `SORTVIZ_ALGORITHM`: bubble, insertion, selection, merge, quick, heap
/// - `SORTVIZ_ORDER`: ascending/asc or descending/desc
/// - `SORTVIZ_BARS`: number of bars
/// - `SORTVIZ_INTERVAL_MS`: pause between steps in milliseconds
pub fn apply_env_config(config: &mut VisualizerConfig) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary variable lookup
///
/// Unparseable values are logged and skipped.
pub fn apply_env_from<F>(config: &mut VisualizerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("SORTVIZ_ALGORITHM") {
        match value.parse::<AlgorithmKind>() {
            Ok(algorithm) => {
                config.algorithm = algorithm;
                config.source = ConfigSource::Env;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring SORTVIZ_ALGORITHM"),
        }
    }
    if let Some(value) = lookup("SORTVIZ_ORDER") {
        match value.parse::<SortOrder>() {
            Ok(order) => {
                config.order = order;
                config.source = ConfigSource::Env;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring SORTVIZ_ORDER"),
        }
    }
    if let Some(value) = lookup("SORTVIZ_BARS") {
        if let Ok(bars) = value.parse::<usize>() {
            config.dataset.count = bars;
            config.source = ConfigSource::Env;
        } else {
            tracing::warn!(value = %value, "Ignoring non-numeric SORTVIZ_BARS");
        }
    }
    if let Some(value) = lookup("SORTVIZ_INTERVAL_MS") {
        if let Ok(ms) = value.parse::<u64>() {
            config.step_interval = Duration::from_millis(ms);
            config.source = ConfigSource::Env;
        } else {
            tracing::warn!(value = %value, "Ignoring non-numeric SORTVIZ_INTERVAL_MS");
        }
    }
}

// =============================================================================
// CLI Overrides
// =============================================================================

/// Overrides supplied on the command line, applied last
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub algorithm: Option<AlgorithmKind>,
    pub order: Option<SortOrder>,
    pub bars: Option<usize>,
    pub step_interval_ms: Option<u64>,
    pub shape: Option<DatasetShape>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn with_bars(mut self, bars: usize) -> Self {
        self.bars = Some(bars);
        self
    }

    #[must_use]
    pub fn with_step_interval_ms(mut self, ms: u64) -> Self {
        self.step_interval_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: DatasetShape) -> Self {
        self.shape = Some(shape);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply every override that is set
    pub fn apply(&self, config: &mut VisualizerConfig) {
        let mut touched = false;

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
            touched = true;
        }
        if let Some(order) = self.order {
            config.order = order;
            touched = true;
        }
        if let Some(bars) = self.bars {
            config.dataset.count = bars;
            touched = true;
        }
        if let Some(ms) = self.step_interval_ms {
            config.step_interval = Duration::from_millis(ms);
            touched = true;
        }
        if let Some(shape) = self.shape {
            config.dataset.shape = shape;
            touched = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
            touched = true;
        }

        if touched {
            config.source = ConfigSource::Cli;
        }
    }
}
