//! Pins the JSON shape of the classify endpoint contract.

use chrono::Utc;
use schemars::schema_for;
use triage_core::responses::{ClassifyRequest, ErrorBody, HealthResponse};
use triage_core::{Category, ClassificationResult, HistoryEntry, Source, Submission};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_result() -> ClassificationResult {
    ClassificationResult {
        category: Category::Unproductive,
        confidence: 0.95,
        suggested_response: "Obrigado pelo contato.".into(),
        reasoning: "Este email foi classificado como IMPRODUTIVO".into(),
        highlighted_keywords: vec!["ganhe".into(), "prêmio".into()],
        original_content: "Ganhe um prêmio grátis".into(),
        processing_time: Some(0.002),
        classification_method: Some("keywords".into()),
    }
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let value = serde_json::to_value(sample_result()).unwrap();
    for field in [
        "category",
        "confidence",
        "suggestedResponse",
        "reasoning",
        "highlightedKeywords",
        "originalContent",
        "processingTime",
        "classificationMethod",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["category"], "Improdutivo");
}

#[test]
fn result_matches_its_schema() {
    let schema = serde_json::to_value(schema_for!(ClassificationResult)).unwrap();
    let instance = serde_json::to_value(sample_result()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn result_schema_rejects_unknown_category() {
    let schema = serde_json::to_value(schema_for!(ClassificationResult)).unwrap();
    let mut instance = serde_json::to_value(sample_result()).unwrap();
    instance["category"] = serde_json::json!("Spam");
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn history_entry_matches_its_schema() {
    let submission = Submission::new("Ganhe um prêmio grátis", Source::Text, None).unwrap();
    let entry = HistoryEntry::record(1, Utc::now(), &submission, &sample_result());
    let schema = serde_json::to_value(schema_for!(HistoryEntry)).unwrap();
    let instance = serde_json::to_value(&entry).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn submission_body_is_accepted_as_classify_request() {
    let submission =
        Submission::new("Relatório anexo", Source::File, Some("r.txt".into())).unwrap();
    let body = serde_json::to_string(&submission).unwrap();
    let request: ClassifyRequest = serde_json::from_str(&body).unwrap();
    assert_eq!(request.content.as_deref(), Some("Relatório anexo"));
    assert_eq!(request.source, Some(Source::File));
    assert_eq!(request.filename.as_deref(), Some("r.txt"));
}

#[test]
fn empty_object_is_a_classify_request_without_content() {
    let request: ClassifyRequest = serde_json::from_str("{}").unwrap();
    assert!(request.content.is_none());
}

#[test]
fn wire_dtos_roundtrip() {
    let error = ErrorBody::new("Email content is required");
    let json = serde_json::to_string(&error).unwrap();
    assert_eq!(json, r#"{"error":"Email content is required"}"#);

    let health = HealthResponse {
        status: "healthy".into(),
        service: "triage".into(),
        version: "0.1.0".into(),
        timestamp: Utc::now(),
        model_enabled: false,
    };
    let value = serde_json::to_value(&health).unwrap();
    assert_eq!(value["modelEnabled"], false);
    let back: HealthResponse = serde_json::from_value(value).unwrap();
    assert_eq!(back, health);
}
