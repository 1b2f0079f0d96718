mod common;

use acube::{AuditLogQuery, SessionListQuery};
use acube_core::{audit::AuditLogFilters, blog::BlogInput, common_types::PageQuery};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path, query_param},
};

fn booking_json() -> serde_json::Value {
    json!({
        "id": "s-1",
        "full_name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "555-012-3456",
        "age": "30",
        "gender": "female",
        "therapy_type": "individual",
        "concerns": ["anxiety"],
        "current_feelings": "Feeling overwhelmed at work lately",
        "previous_therapy": "no",
        "preferred_time": "mornings",
        "consent": true,
        "status": "pending",
        "created_at": "2025-06-01T09:30:00Z"
    })
}

#[tokio::test]
async fn sessions_list_sends_pagination_and_status_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/sessions"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("status_filter", "pending"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [booking_json()],
            "pagination": { "total": 26, "page": 2, "limit": 25, "total_pages": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let query = SessionListQuery {
        page: PageQuery::new(2, 25),
        status_filter: Some("pending".to_string()),
    };
    let page = harness.client.sessions().get_all(&query).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].full_name, "Jane Doe");
    assert_eq!(page.pagination.total, 26);
}

#[tokio::test]
async fn session_status_update_goes_through_the_patch_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/admin/sessions/s-1/status"))
        .and(query_param("status", "confirmed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Status updated successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let response = harness.client.sessions().update_status("s-1", "confirmed").await.unwrap();
    assert_eq!(response.message, "Status updated successfully");
}

#[tokio::test]
async fn audit_log_listing_passes_filters_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/audit-logs"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .and(query_param("action", "create"))
        .and(query_param("entity", "blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "log-1",
                "action": "create",
                "entity": "blogs",
                "entity_id": "b-9",
                "admin_email": "admin@acube.com",
                "details": { "title": "New post" },
                "timestamp": "2025-06-02T12:00:00Z"
            }],
            "pagination": { "total": 1, "page": 1, "limit": 50, "total_pages": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let query = AuditLogQuery {
        page: PageQuery::new(1, 50),
        filters: AuditLogFilters {
            action: Some("create".to_string()),
            entity: Some("blogs".to_string()),
            admin_email: None,
        },
    };
    let page = harness.client.audit_logs().get_all(&query).await.unwrap();
    assert_eq!(page.data[0].admin_email, "admin@acube.com");
    assert_eq!(page.data[0].entity_id.as_deref(), Some("b-9"));
}

#[tokio::test]
async fn blog_creation_posts_the_typed_payload() {
    let server = MockServer::start().await;

    let input = BlogInput {
        title: "Managing stress".to_string(),
        excerpt: "Short practical techniques".to_string(),
        content: "A longer article body about everyday stress management.".to_string(),
        author: "Dr. Admin".to_string(),
        category: "Wellness".to_string(),
        read_time: "5 min".to_string(),
        featured: false,
        image_url: None,
    };

    Mock::given(method("POST"))
        .and(path("/api/admin/blogs"))
        .and(body_json(json!({
            "title": "Managing stress",
            "excerpt": "Short practical techniques",
            "content": "A longer article body about everyday stress management.",
            "author": "Dr. Admin",
            "category": "Wellness",
            "read_time": "5 min",
            "featured": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Blog created",
            "blog": {
                "id": "b-1",
                "title": "Managing stress",
                "excerpt": "Short practical techniques",
                "content": "A longer article body about everyday stress management.",
                "author": "Dr. Admin",
                "category": "Wellness",
                "read_time": "5 min",
                "featured": false,
                "created_at": "2025-06-03T08:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let created = harness.client.blogs().create(&input).await.unwrap();
    assert_eq!(created.blog.id, "b-1");
}

#[tokio::test]
async fn search_sends_the_query_term() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/search"))
        .and(query_param("q", "anxiety workshop"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "events": [], "blogs": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let results = harness.client.search().query("anxiety workshop").await.unwrap();
    assert!(results["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upload_sends_multipart_form_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/upload"))
        .and(header("authorization", "Bearer a1"))
        .and(body_string_contains("test_image.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "/uploads/test_image.png",
            "filename": "test_image.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let harness = common::client_with_tokens(&server.uri(), Some(common::pair("a1", "r1")));

    let uploaded = harness
        .client
        .uploads()
        .upload("test_image.png", vec![0x89, 0x50, 0x4e, 0x47], "image/png")
        .await
        .unwrap();
    assert_eq!(uploaded.filename, "test_image.png");
    assert_eq!(uploaded.url, "/uploads/test_image.png");
}
