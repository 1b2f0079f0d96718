use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    session::{SessionBooking, SessionBookingInput},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Debug, Clone, Serialize, Default)]
pub struct SessionListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionCreated {
    pub message: Option<String>,
    pub session: SessionBooking,
}

#[derive(Clone)]
pub struct SessionsApi {
    client: Arc<HttpClient>,
}

impl SessionsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &SessionListQuery) -> ApiResult<Paginated<SessionBooking>> {
        self.client.get_with_query("api/admin/sessions", Some(query)).await
    }

    pub async fn create(&self, booking: &SessionBookingInput) -> ApiResult<SessionCreated> {
        self.client.post("api/admin/sessions", booking).await
    }

    /// Partial update; only the fields present in `changes` are touched.
    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/sessions/{}", id), changes).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> ApiResult<MessageResponse> {
        #[derive(Serialize)]
        struct StatusQuery<'a> {
            status: &'a str,
        }

        self.client
            .patch_with_query(&format!("api/admin/sessions/{}/status", id), &StatusQuery { status })
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/sessions/{}", id)).await
    }
}
