use std::sync::Arc;

use serde_json::Value;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct DashboardApi {
    client: Arc<HttpClient>,
}

impl DashboardApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Aggregated counters and recent activity for the admin landing page.
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("api/admin/dashboard").await
    }
}
