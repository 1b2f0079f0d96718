use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    contact::ContactMessage,
};
use serde_json::{Value, json};

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Clone)]
pub struct ContactsApi {
    client: Arc<HttpClient>,
}

impl ContactsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, page: &PageQuery) -> ApiResult<Paginated<ContactMessage>> {
        self.client.get_with_query("api/admin/contacts", Some(page)).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/contacts/{}", id), changes).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> ApiResult<MessageResponse> {
        self.update(id, &json!({ "status": status })).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/contacts/{}", id)).await
    }
}
