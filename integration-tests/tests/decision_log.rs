//! Decision log behaviour through the engine.

mod common;

use anyhow::Result;
use common::ProjectFixture;
use flowmode_engine::infrastructure::config::{DEFAULT_DECISION_LOG_PATH, Settings};
use flowmode_engine::infrastructure::decision_log::{DecisionRecord, JsonlDecisionLog};
use flowmode_engine::{DecisionContext, DecisionEngine, FlowMode};
use std::fs;

fn read_records(path: &std::path::Path) -> Result<Vec<DecisionRecord>> {
    fs::read_to_string(path)?
        .lines()
        .map(|line| Ok(serde_json::from_str(line)?))
        .collect()
}

#[test]
fn test_each_decision_appends_one_record() -> Result<()> {
    let project = ProjectFixture::new()?;
    let engine = DecisionEngine::new(project.path());

    let first = engine.decide("fix login bug crash", &DecisionContext::new())?;
    let second = engine.decide("write api docs", &DecisionContext::new())?;

    let records = read_records(&project.path().join(DEFAULT_DECISION_LOG_PATH))?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].decision_id, first.metadata.decision_id);
    assert_eq!(records[1].decision_id, second.metadata.decision_id);
    assert_eq!(records[0].recommended_flow, FlowMode::Minimal);
    let summary = records[0].project.as_ref().expect("project summary");
    assert_eq!(summary.project_type, "unknown");
    assert_eq!(summary.team_size, 1);
    Ok(())
}

#[test]
fn test_log_does_not_change_profile() -> Result<()> {
    let project = ProjectFixture::new()?;
    let engine = DecisionEngine::new(project.path());

    let first = engine.decide("fix bug", &DecisionContext::new())?;
    let second = engine.decide("fix bug", &DecisionContext::new())?;
    assert_eq!(
        first.metadata.project_profile,
        second.metadata.project_profile
    );
    Ok(())
}

#[test]
fn test_unwritable_log_still_decides() -> Result<()> {
    let project = ProjectFixture::new()?;
    project.file("blocker", "a file where a directory should be")?;

    let engine = DecisionEngine::builder()
        .project_root(project.path())
        .decision_sink(JsonlDecisionLog::new(
            project.path().join("blocker/decisions.jsonl"),
        ))
        .build();
    let result = engine.decide("fix login bug crash", &DecisionContext::new())?;
    assert_eq!(result.recommended_flow, FlowMode::Minimal);
    assert!(!result.metadata.fallback);
    Ok(())
}

#[test]
fn test_settings_can_disable_log() -> Result<()> {
    let project = ProjectFixture::new()?;
    let config_path = project.path().join("flowmode.toml");
    fs::write(
        &config_path,
        format!(
            "project_root = {:?}\n\n[decision_log]\nenabled = false\n",
            project.path().display().to_string()
        ),
    )?;

    let settings = Settings::from_file(&config_path)?;
    let engine = DecisionEngine::from_settings(&settings)?;
    engine.decide("fix bug", &DecisionContext::new())?;

    assert!(!project.path().join(DEFAULT_DECISION_LOG_PATH).exists());
    Ok(())
}

#[test]
fn test_fallback_decisions_are_logged() -> Result<()> {
    let project = ProjectFixture::new()?;
    let log_path = project.path().join("log.jsonl");
    let engine = DecisionEngine::builder()
        .project_root(project.path().join("missing"))
        .decision_sink(JsonlDecisionLog::new(&log_path))
        .build();

    let result = engine.decide("fix bug", &DecisionContext::new())?;
    assert!(result.metadata.fallback);

    let records = read_records(&log_path)?;
    assert_eq!(records.len(), 1);
    assert!(records[0].fallback);
    assert!(records[0].task_category.is_none());
    Ok(())
}
