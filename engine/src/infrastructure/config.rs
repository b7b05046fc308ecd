//! Engine settings.
//!
//! Sources are layered in this order, later ones winning:
//!
//! 1. built-in defaults
//! 2. `<user config dir>/flowmode/config.{toml,yaml,json,...}`
//! 3. `./flowmode.{toml,yaml,json,...}`
//! 4. environment variables prefixed `FLOWMODE__`, with `__` between keys
//!
//! ```no_run
//! use flowmode_engine::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! ```

use crate::domain::{DecisionContext, Urgency};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default decision log location, relative to the project root.
pub const DEFAULT_DECISION_LOG_PATH: &str = ".flowmode/decisions.jsonl";

/// Top-level configuration for the engine and the `flowmode` binary.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Directory profiled by `decide`. Defaults to the working directory.
    #[serde(default)]
    pub project_root: Option<PathBuf>,
    /// Optional JSON rule and estimation document.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// Decision log settings.
    pub decision_log: DecisionLogSettings,
    /// Telemetry settings.
    pub telemetry: TelemetrySettings,
    /// Defaults applied when the caller leaves a value out.
    pub defaults: DefaultsSettings,
    /// Overrides applied to every decision made by the binary.
    #[serde(default)]
    pub overrides: DecisionContext,
}

/// Decision log settings.
#[derive(Debug, Deserialize, Clone)]
pub struct DecisionLogSettings {
    /// Append decisions to the log.
    pub enabled: bool,
    /// Log file; relative paths resolve against the project root.
    pub path: PathBuf,
}

/// Telemetry settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Default filter directive, e.g. `info` or `flowmode_engine=debug`.
    pub log_level: String,
    /// Emit JSON log lines instead of text.
    pub json: bool,
}

/// Caller defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsSettings {
    /// Urgency used when a decision does not name one.
    pub urgency: Urgency,
}

impl Settings {
    /// Loads settings from every source listed in the module docs.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or the merged configuration
    /// cannot be deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        if let Some(dir) = dirs::config_dir() {
            builder = builder
                .add_source(File::from(dir.join("flowmode").join("config")).required(false));
        }
        builder
            .add_source(File::with_name("flowmode").required(false))
            .add_source(Environment::with_prefix("FLOWMODE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Loads settings from defaults and a single required file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed, or does not
    /// deserialize.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("decision_log.enabled", true)?
            .set_default("decision_log.path", DEFAULT_DECISION_LOG_PATH)?
            .set_default("telemetry.log_level", "info")?
            .set_default("telemetry.json", false)?
            .set_default("defaults.urgency", Urgency::default().as_str())
    }

    /// The configured project root, or `.`.
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The decision log path resolved against `root`.
    #[must_use]
    pub fn decision_log_path(&self, root: &Path) -> PathBuf {
        if self.decision_log.path.is_absolute() {
            self.decision_log.path.clone()
        } else {
            root.join(&self.decision_log.path)
        }
    }
}
