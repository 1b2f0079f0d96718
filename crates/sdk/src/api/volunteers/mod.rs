use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    volunteer::Volunteer,
};
use serde_json::{Value, json};

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Clone)]
pub struct VolunteersApi {
    client: Arc<HttpClient>,
}

impl VolunteersApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, page: &PageQuery) -> ApiResult<Paginated<Volunteer>> {
        self.client.get_with_query("api/admin/volunteers", Some(page)).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/volunteers/{}", id), changes).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> ApiResult<MessageResponse> {
        self.update(id, &json!({ "status": status })).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/volunteers/{}", id)).await
    }
}
