mod common;

use acube::{ApiSdkError, TokenStore};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn login_stores_tokens_and_next_request_uses_them() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .and(body_json(json!({ "email": "admin@acube.com", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "a1", "refresh_token": "r1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "admin@acube.com" })))
        .expect(1)
        .mount(&server)
        .await;

    // A round trip straight after login must not need a refresh.
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), None);

    let issued = harness.client.auth().login("admin@acube.com", "secret").await.unwrap();
    assert_eq!(issued.access_token, "a1");

    let me = harness.client.auth().me().await.unwrap();
    assert_eq!(me["email"], "admin@acube.com");

    let stored = harness.store.load().unwrap();
    assert_eq!(stored.access_token, "a1");
    assert_eq!(stored.refresh_token, "r1");
}

#[tokio::test]
async fn login_failure_surfaces_the_server_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), None);

    let error = harness.client.auth().login("admin@acube.com", "wrong").await.unwrap_err();
    match error {
        ApiSdkError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(harness.store.load().is_none());
    assert_eq!(harness.listener.count(), 0);
}

#[tokio::test]
async fn logout_revokes_the_refresh_token_and_clears_the_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/logout"))
        .and(body_json(json!({ "refresh_token": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    harness.client.auth().logout().await.unwrap();
    assert!(harness.store.load().is_none());
}

#[tokio::test]
async fn logout_clears_the_store_even_when_revocation_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    harness.client.auth().logout().await.unwrap();
    assert!(harness.store.load().is_none());
}
