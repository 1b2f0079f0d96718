use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    job::{Job, JobInput},
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Debug, Deserialize)]
pub struct JobCreated {
    pub message: Option<String>,
    pub job: Job,
}

#[derive(Clone)]
pub struct JobsApi {
    client: Arc<HttpClient>,
}

impl JobsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, page: &PageQuery) -> ApiResult<Paginated<Job>> {
        self.client.get_with_query("api/admin/jobs", Some(page)).await
    }

    pub async fn create(&self, job: &JobInput) -> ApiResult<JobCreated> {
        self.client.post("api/admin/jobs", job).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/jobs/{}", id), changes).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/jobs/{}", id)).await
    }
}
