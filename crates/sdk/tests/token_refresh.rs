mod common;

use std::time::Duration;

use acube::{ApiSdkError, TokenStore};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path},
};

#[tokio::test]
async fn valid_token_makes_a_single_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_sessions": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("good", "r1")));

    let dashboard = harness.client.dashboard().get().await.unwrap();
    assert_eq!(dashboard["total_sessions"], 3);
    assert_eq!(harness.listener.count(), 0);
}

#[tokio::test]
async fn expired_access_token_is_refreshed_and_replayed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "r1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "fresh", "refresh_token": "r2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_sessions": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("stale", "r1")));

    let dashboard = harness.client.dashboard().get().await.unwrap();
    assert_eq!(dashboard["total_sessions"], 7);

    // Both tokens rotated by the refresh.
    let stored = harness.store.load().unwrap();
    assert_eq!(stored.access_token, "fresh");
    assert_eq!(stored.refresh_token, "r2");
    assert_eq!(harness.listener.count(), 0);
}

#[tokio::test]
async fn concurrent_failures_share_a_single_refresh() {
    let server = MockServer::start().await;

    // Some of the five callers race past the stale token, some pick up
    // the fresh one straight from the refreshed store; the refresh
    // endpoint must be hit exactly once either way.
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1..=5)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "r1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "fresh", "refresh_token": "r2" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(5)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("stale", "r1")));

    let dashboard = harness.client.dashboard();
    let (a, b, c, d, e) = tokio::join!(
        dashboard.get(),
        dashboard.get(),
        dashboard.get(),
        dashboard.get(),
        dashboard.get(),
    );
    for result in [a, b, c, d, e] {
        assert_eq!(result.unwrap()["ok"], true);
    }
    assert_eq!(harness.listener.count(), 0);
}

#[tokio::test]
async fn failed_refresh_clears_tokens_and_notifies_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid refresh token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("stale", "bad")));

    let dashboard = harness.client.dashboard();
    let (a, b, c) = tokio::join!(dashboard.get(), dashboard.get(), dashboard.get());
    for result in [a, b, c] {
        assert!(matches!(result.unwrap_err(), ApiSdkError::SessionExpired));
    }

    assert!(harness.store.load().is_none());
    assert_eq!(harness.listener.count(), 1);
}

#[tokio::test]
async fn missing_tokens_send_no_auth_header_and_skip_the_refresh_call() {
    let server = MockServer::start().await;

    // A request from an unauthenticated client must not carry a bearer.
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), None);

    let result = harness.client.dashboard().get().await;
    assert!(matches!(result.unwrap_err(), ApiSdkError::SessionExpired));
    assert_eq!(harness.listener.count(), 1);
}

#[tokio::test]
async fn replay_that_is_still_unauthorized_fails_without_a_second_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "fresh", "refresh_token": "r2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("stale", "r1")));

    let result = harness.client.dashboard().get().await;
    assert!(matches!(result.unwrap_err(), ApiSdkError::StillUnauthorized));

    // The refresh itself succeeded, so the session is kept.
    let stored = harness.store.load().unwrap();
    assert_eq!(stored.refresh_token, "r2");
    assert_eq!(harness.listener.count(), 0);
}
