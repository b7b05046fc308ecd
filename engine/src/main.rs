//! `flowmode` command line: prints a flow-mode recommendation for a task as JSON.

use anyhow::{Context, Result, bail};
use flowmode_engine::infrastructure::{config::Settings, telemetry::TelemetryBuilder};
use flowmode_engine::{DecisionEngine, VERSION};
use tracing::{debug, info};

fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;

    TelemetryBuilder::from_settings("flowmode", &settings.telemetry)
        .init()
        .context("Failed to initialize telemetry")?;

    let task = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if task.trim().is_empty() {
        bail!("usage: flowmode <task description...>");
    }

    info!(version = VERSION, "Flowmode starting");
    let engine = DecisionEngine::from_settings(&settings)?;
    debug!(root = %engine.project_root().display(), "Engine ready");

    let result = engine.decide(&task, &settings.overrides)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
