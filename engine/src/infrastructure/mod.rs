//! Infrastructure layer: settings, telemetry and the decision log.

pub mod config;
pub mod decision_log;
pub mod telemetry;
