use std::sync::Arc;

use acube_core::{
    common_types::{PageQuery, Paginated},
    event::{Event, EventInput},
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Debug, Deserialize)]
pub struct EventCreated {
    pub message: Option<String>,
    pub event: Event,
}

#[derive(Clone)]
pub struct EventsApi {
    client: Arc<HttpClient>,
}

impl EventsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, page: &PageQuery) -> ApiResult<Paginated<Event>> {
        self.client.get_with_query("api/admin/events", Some(page)).await
    }

    pub async fn create(&self, event: &EventInput) -> ApiResult<EventCreated> {
        self.client.post("api/admin/events", event).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/events/{}", id), changes).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/events/{}", id)).await
    }
}
