use std::sync::Arc;

use acube_core::{
    blog::{Blog, BlogInput},
    common_types::{PageQuery, Paginated},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, MessageResponse},
};

#[derive(Debug, Clone, Serialize, Default)]
pub struct BlogListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlogCreated {
    pub message: Option<String>,
    pub blog: Blog,
}

#[derive(Clone)]
pub struct BlogsApi {
    client: Arc<HttpClient>,
}

impl BlogsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &BlogListQuery) -> ApiResult<Paginated<Blog>> {
        self.client.get_with_query("api/admin/blogs", Some(query)).await
    }

    pub async fn create(&self, blog: &BlogInput) -> ApiResult<BlogCreated> {
        self.client.post("api/admin/blogs", blog).await
    }

    pub async fn update(&self, id: &str, changes: &Value) -> ApiResult<MessageResponse> {
        self.client.put(&format!("api/admin/blogs/{}", id), changes).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.client.delete(&format!("api/admin/blogs/{}", id)).await
    }
}
