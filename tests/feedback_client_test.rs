use feedback_survey::clients::FeedbackClient;
use feedback_survey::error::{ApiError, AppError};
use feedback_survey::models::question::QuestionKind;
use feedback_survey::models::session::StartSessionRequest;
use feedback_survey::{Answer, Config, SessionId};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn client_for(server: &MockServer) -> FeedbackClient {
    let config = Config {
        api_base_url: server.base_url(),
        user_agent: "test-agent/1.0".to_string(),
        ..Config::default()
    };
    FeedbackClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_start_session_sends_consent_and_version() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/session/start").json_body(json!({
                "consented": true,
                "research_version": "v1",
                "user_agent": "test-agent/1.0"
            }));
            then.status(200).json_body(json!({ "session_id": "xyz" }));
        })
        .await;

    let response = client_for(&server)
        .start_session(&StartSessionRequest {
            consented: true,
            research_version: "v1".to_string(),
            user_agent: "test-agent/1.0".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.session_id, "xyz");
}

#[tokio::test]
async fn test_start_feedback_decodes_server_question_list() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/feedback/start")
                .json_body(json!({ "session_id": "s1" }));
            then.status(200).json_body(json!({
                "session_id": "s1",
                "questions": [
                    {"key": "believability", "type": "likert", "label": "Is the environment believable?", "scale_min": 1, "scale_max": 5},
                    {"key": "free_text", "type": "text", "label": "Any suggestions to improve realism or usefulness?"}
                ]
            }));
        })
        .await;

    let questions = client_for(&server)
        .start_feedback(&SessionId::new("s1").unwrap())
        .await
        .unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].scale(), 1..=5);
    assert_eq!(questions[1].kind, QuestionKind::FreeText);
}

#[tokio::test]
async fn test_submit_answer_sends_null_for_unused_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/feedback/answer").json_body(json!({
                "session_id": "s1",
                "q_key": "free_text",
                "answer_numeric": null,
                "answer_text": "hello"
            }));
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    client_for(&server)
        .submit_answer(
            &SessionId::new("s1").unwrap(),
            &Answer::text("free_text", "  hello  "),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_client_error_status_is_not_retryable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/session/end");
            then.status(404).body("{\"detail\":\"Session not found\"}");
        })
        .await;

    let err = client_for(&server)
        .end_session(&SessionId::new("missing").unwrap())
        .await
        .unwrap_err();

    match &err {
        AppError::Api(ApiError::BadStatus { status, body, .. }) => {
            assert_eq!(*status, 404);
            assert!(body.contains("Session not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/session/start");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let err = client_for(&server)
        .start_session(&StartSessionRequest {
            consented: false,
            research_version: "v1".to_string(),
            user_agent: "test-agent/1.0".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_retryable() {
    let config = Config {
        api_base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_secs: Some(5),
        ..Config::default()
    };
    let err = FeedbackClient::new(&config)
        .unwrap()
        .health()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::RequestFailed { .. })));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_configured_timeout_fails_slow_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({ "ok": true }));
        })
        .await;

    let config = Config {
        api_base_url: server.base_url(),
        request_timeout_secs: Some(1),
        ..Config::default()
    };
    let err = FeedbackClient::new(&config)
        .unwrap()
        .health()
        .await
        .unwrap_err();

    match &err {
        AppError::Api(ApiError::RequestFailed { source, .. }) => assert!(source.is_timeout()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_default_config_waits_for_slow_response() {
    let server = MockServer::start_async().await;
    let health = server
        .mock_async(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(json!({ "ok": true }));
        })
        .await;

    assert!(Config::default().request_timeout().is_none());
    client_for(&server).health().await.unwrap();
    health.assert_async().await;
}

#[tokio::test]
async fn test_health_false_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200).json_body(json!({ "ok": false }));
        })
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert!(matches!(err, AppError::Api(ApiError::Unhealthy { .. })));
}

#[test]
fn test_export_link_points_at_csv() {
    let config = Config {
        api_base_url: "https://feedback.example.org/".to_string(),
        ..Config::default()
    };
    assert_eq!(
        FeedbackClient::new(&config).unwrap().export_csv_url(),
        "https://feedback.example.org/feedback/export.csv"
    );
}
