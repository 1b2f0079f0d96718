use std::sync::Arc;

use serde::Deserialize;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    pub url: String,
    pub filename: String,
}

#[derive(Clone)]
pub struct UploadApi {
    client: Arc<HttpClient>,
}

impl UploadApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Uploads a file as multipart form data under the `file` field.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ApiResult<UploadResult> {
        self.client.post_multipart("api/admin/upload", "file", file_name, bytes, content_type).await
    }
}
