use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Clone)]
pub struct SearchApi {
    client: Arc<HttpClient>,
}

impl SearchApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Cross-entity admin search.
    pub async fn query(&self, q: &str) -> ApiResult<Value> {
        #[derive(Serialize)]
        struct SearchQuery<'a> {
            q: &'a str,
        }

        self.client.get_with_query("api/admin/search", Some(&SearchQuery { q })).await
    }
}
