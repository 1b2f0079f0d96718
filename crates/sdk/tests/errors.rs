mod common;

use acube::ApiSdkError;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn server_detail_becomes_the_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/sessions/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Session not found" })),
        )
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let error = harness.client.sessions().delete("missing").await.unwrap_err();
    match error {
        ApiSdkError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Session not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_the_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let error = harness.client.dashboard().get().await.unwrap_err();
    match error {
        ApiSdkError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP error 500");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn transport_failures_are_surfaced_to_the_caller() {
    let server = MockServer::start().await;
    let dead_uri = server.uri();
    drop(server);

    let harness = common::client_with_tokens(&dead_uri, Some(common::pair("a1", "r1")));

    let error = harness.client.dashboard().get().await.unwrap_err();
    assert!(matches!(error, ApiSdkError::HttpError(_)));
}
