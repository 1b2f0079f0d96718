use std::sync::Arc;

use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Clone)]
pub struct SettingsApi {
    client: Arc<HttpClient>,
}

impl SettingsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("api/admin/settings").await
    }

    pub async fn update(&self, settings: &Value) -> ApiResult<MessageResponse> {
        self.client.put("api/admin/settings", settings).await
    }
}
