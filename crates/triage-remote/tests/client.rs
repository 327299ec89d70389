use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use triage_config::RemoteConfig;
use triage_core::{Category, Source, Submission};
use triage_remote::{RemoteClient, RemoteError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(base_url: &str) -> RemoteConfig {
    RemoteConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        ..RemoteConfig::default()
    }
}

fn submission() -> Submission {
    Submission::new("Reunião de projeto amanhã", Source::Text, None).unwrap()
}

#[tokio::test]
async fn classify_parses_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .and(body_json(json!({
            "content": "Reunião de projeto amanhã",
            "source": "text"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "category": "Produtivo",
            "confidence": 0.87,
            "suggestedResponse": "Confirmo presença.",
            "reasoning": "Termos de trabalho.",
            "highlightedKeywords": ["reunião", "projeto"],
            "originalContent": "Reunião de projeto amanhã",
            "processingTime": 0.012,
            "classificationMethod": "keywords"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RemoteClient::new(&config_for(&server.uri()));
    let result = client.classify(&submission()).await.unwrap();

    assert_eq!(result.category, Category::Productive);
    assert_eq!(result.confidence_percent(), 87);
    assert_eq!(result.highlighted_keywords, vec!["reunião", "projeto"]);
    assert_eq!(result.classification_method.as_deref(), Some("keywords"));
}

#[tokio::test]
async fn classify_surfaces_error_field_of_failure_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Internal server error"})),
        )
        .mount(&server)
        .await;

    let client = RemoteClient::new(&config_for(&server.uri()));
    let err = client.classify(&submission()).await.unwrap_err();

    match err {
        RemoteError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn classify_rejects_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"category": "Talvez"})))
        .mount(&server)
        .await;

    let client = RemoteClient::new(&config_for(&server.uri()));
    let err = client.classify(&submission()).await.unwrap_err();
    assert!(matches!(err, RemoteError::Parse(_)));
}

#[tokio::test]
async fn classify_honors_custom_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "category": "Improdutivo",
            "confidence": 0.7,
            "suggestedResponse": "Obrigado.",
            "reasoning": "Promoção."
        })))
        .mount(&server)
        .await;

    let config = RemoteConfig {
        classify_path: "api/v1/classify".to_string(),
        ..config_for(&format!("{}/", server.uri()))
    };
    let client = RemoteClient::new(&config);
    let result = client.classify(&submission()).await.unwrap();
    assert_eq!(result.category, Category::Unproductive);
}

#[tokio::test]
async fn classify_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = RemoteConfig {
        timeout_secs: 1,
        ..config_for(&server.uri())
    };
    let err = RemoteClient::new(&config)
        .classify(&submission())
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn classify_reports_connection_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let client = RemoteClient::new(&config_for(&format!("http://{addr}")));
    let err = client.classify(&submission()).await.unwrap_err();
    assert!(matches!(err, RemoteError::Http(_)));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn health_treats_any_status_as_reachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = RemoteClient::new(&config_for(&server.uri()));
    let report = client.health().await;

    assert!(report.reachable);
    assert_eq!(report.status, Some(503));
    assert_eq!(report.url, format!("{}/health", server.uri()));
}

#[tokio::test]
async fn health_reports_unreachable_service() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let report = RemoteClient::new(&config_for(&format!("http://{addr}")))
        .health()
        .await;
    assert!(!report.reachable);
    assert_eq!(report.status, None);
}
