//! Loading rule and estimation tables from JSON documents.

mod common;

use anyhow::Result;
use common::ProjectFixture;
use flowmode_engine::error::RuleError;
use flowmode_engine::infrastructure::config::Settings;
use flowmode_engine::rules::RuleDocument;
use flowmode_engine::{DecisionContext, DecisionEngine, EngineError, FlowMode};
use std::fs;

const ALWAYS_COMPLETE: &str = r#"{
    "rules": [
        {"flow": "complete", "conditions": [
            {"field": "team_size", "op": ">=", "value": 1}
        ]},
        {"flow": "minimal", "weight": 0.5, "conditions": [
            {"field": "team_size", "op": ">=", "value": 1}
        ]}
    ],
    "estimates": {
        "bug-fix": {"base_hours": 10, "complexity_factor": 1.0}
    }
}"#;

#[test]
fn test_document_replaces_builtin_tables() -> Result<()> {
    let project = ProjectFixture::new()?;
    let (rules, estimates) = RuleDocument::from_json_str(ALWAYS_COMPLETE)?.into_tables()?;
    let engine = DecisionEngine::builder()
        .project_root(project.path())
        .rules(rules)
        .estimates(estimates)
        .decision_sink(flowmode_engine::infrastructure::decision_log::NullDecisionSink)
        .build();

    let result = engine.decide("fix login bug crash", &DecisionContext::new())?;
    assert_eq!(result.recommended_flow, FlowMode::Complete);
    assert!((result.confidence - 1.0).abs() < 1e-9);
    assert!((result.metadata.flow_scores[&FlowMode::Minimal] - 0.5).abs() < 1e-9);
    assert!(result.metadata.flow_scores[&FlowMode::Standard].abs() < 1e-9);
    // 10 * 1.0 * 1.0 * 0.9 for a solo developer.
    assert_eq!(result.estimated_hours, 9);
    Ok(())
}

#[test]
fn test_settings_load_rules_path() -> Result<()> {
    let project = ProjectFixture::new()?;
    let rules_path = project.path().join("rules.json");
    fs::write(&rules_path, ALWAYS_COMPLETE)?;
    let config_path = project.path().join("flowmode.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "project_root": project.path(),
            "rules_path": rules_path,
            "decision_log": {"enabled": false},
        })
        .to_string(),
    )?;

    let engine = DecisionEngine::from_settings(&Settings::from_file(&config_path)?)?;
    let result = engine.decide("fix bug", &DecisionContext::new())?;
    assert_eq!(result.recommended_flow, FlowMode::Complete);
    Ok(())
}

#[test]
fn test_invalid_documents_are_rejected() {
    let negative = r#"{"rules": [{"flow": "minimal", "weight": -1, "conditions": []}]}"#;
    let err = RuleDocument::from_json_str(negative)
        .and_then(RuleDocument::into_tables)
        .unwrap_err();
    assert!(matches!(err, RuleError::InvalidWeight { .. }));

    let unknown_op =
        r#"{"rules": [{"flow": "minimal", "conditions": [{"field": "x", "op": "~", "value": 1}]}]}"#;
    assert!(matches!(
        RuleDocument::from_json_str(unknown_op),
        Err(RuleError::Malformed(_))
    ));

    let reversed = r#"{"rules": [{"flow": "minimal", "conditions": [
        {"field": "team_size", "op": "between", "value": [8, 2]}
    ]}]}"#;
    let err = RuleDocument::from_json_str(reversed)
        .and_then(RuleDocument::into_tables)
        .unwrap_err();
    assert!(matches!(err, RuleError::InvalidRange { .. }));
}

#[test]
fn test_missing_rules_file_fails_engine_construction() -> Result<()> {
    let project = ProjectFixture::new()?;
    let config_path = project.path().join("flowmode.json");
    fs::write(
        &config_path,
        serde_json::json!({"rules_path": project.path().join("absent.json")}).to_string(),
    )?;

    let err = DecisionEngine::from_settings(&Settings::from_file(&config_path)?).unwrap_err();
    assert!(matches!(err, EngineError::Rules(RuleError::Read { .. })));
    Ok(())
}
