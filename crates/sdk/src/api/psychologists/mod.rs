use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    psychologist::{Psychologist, PsychologistInput},
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Debug, Deserialize)]
pub struct PsychologistCreated {
    pub message: Option<String>,
    pub psychologist: Psychologist,
}

#[derive(Clone)]
pub struct PsychologistsApi {
    client: Arc<HttpClient>,
}

impl PsychologistsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, page: &PageQuery) -> ApiResult<Paginated<Psychologist>> {
        self.client.get_with_query("api/admin/psychologists", Some(page)).await
    }

    pub async fn create(&self, psychologist: &PsychologistInput) -> ApiResult<PsychologistCreated> {
        self.client.post("api/admin/psychologists", psychologist).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/psychologists/{}", id), changes).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/psychologists/{}", id)).await
    }
}
