//! `tracing` subscriber setup.

use super::config::TelemetrySettings;
use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Builder for the process-wide `tracing` subscriber.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder logging at `info` in text format.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json: false,
        }
    }

    /// Creates a builder from loaded settings.
    #[must_use]
    pub fn from_settings(service_name: impl Into<String>, settings: &TelemetrySettings) -> Self {
        Self::new(service_name)
            .with_log_level(settings.log_level.clone())
            .with_json(settings.json)
    }

    /// Sets the filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches between JSON and text output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Installs the subscriber. `RUST_LOG` takes precedence over the
    /// configured level. Output goes to stderr so stdout stays clean for
    /// rendered decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let json_layer = self.json.then(|| {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
        });
        let text_layer = (!self.json).then(|| fmt::layer().with_writer(std::io::stderr));

        Registry::default()
            .with(env_filter)
            .with(json_layer)
            .with(text_layer)
            .try_init()
            .with_context(|| format!("Failed to init subscriber for {}", self.service_name))
    }
}
