use std::sync::Arc;

use reqwest::{
    Client, Method, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::error;

use crate::api::tokens::TokenManager;
use crate::api::types::{ApiBaseConfig, ApiResult, ApiSdkError};

pub(crate) const REFRESH_ENDPOINT: &str = "api/admin/auth/refresh";

/// Authenticated gateway to the admin API.
///
/// Attaches the stored bearer token to every call, refreshes it through
/// the [`TokenManager`] on a 401 and replays the original request once
/// with the new token. A retried request is always built fresh; the
/// failed one is never reused.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_config: ApiBaseConfig,
    tokens: Arc<TokenManager>,
}

impl HttpClient {
    pub fn new(base_config: ApiBaseConfig, tokens: Arc<TokenManager>) -> Self {
        Self { client: Client::new(), base_config, tokens }
    }

    pub(crate) fn tokens(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_config.server_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Runs one request through the 401 protocol.
    ///
    /// `make` builds a fresh request for every attempt and receives the
    /// bearer token to attach, if any.
    async fn execute<F>(&self, make: F) -> ApiResult<reqwest::Response>
    where
        F: Fn(&Client, Option<&str>) -> ApiResult<reqwest::RequestBuilder>,
    {
        let (mut token, epoch) = self.tokens.bearer().await;
        let mut replayed = false;

        loop {
            let request = make(&self.client, token.as_deref())?;
            let response = request
                .send()
                .await
                .inspect_err(|e| error!("admin api request failed: {}", e))?;

            if response.status() == StatusCode::UNAUTHORIZED {
                if replayed {
                    return Err(ApiSdkError::StillUnauthorized);
                }
                let refresh_url = self.build_url(REFRESH_ENDPOINT);
                match self.tokens.refresh(&self.client, &refresh_url, epoch).await {
                    Some(fresh) => {
                        token = Some(fresh);
                        replayed = true;
                        continue;
                    }
                    None => return Err(ApiSdkError::SessionExpired),
                }
            }

            return into_api_response(response).await;
        }
    }

    async fn request<Q, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<reqwest::Response>
    where
        Q: Serialize,
        B: Serialize,
    {
        let url = self.build_url(endpoint);
        // Queries go through a JSON map so flattened structs end up as
        // plain key/value pairs. Anything that does not serialize to a
        // map cannot be url-encoded.
        let query = query
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiSdkError::SerializationError(e.to_string()))?;
        if let Some(query) = query.as_ref() {
            if !query.is_object() {
                return Err(ApiSdkError::SerializationError(
                    "query must serialize to a map of key/value pairs".to_string(),
                ));
            }
        }
        self.execute(|client, token| {
            let mut request = client
                .request(method.clone(), &url)
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }
            if let Some(query) = query.as_ref() {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }
            Ok(request)
        })
        .await
    }

    pub async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request::<(), ()>(Method::GET, endpoint, None, None).await?;
        Ok(response.json().await?)
    }

    pub async fn get_with_query<T, Q>(&self, endpoint: &str, query: Option<&Q>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let response = self.request::<Q, ()>(Method::GET, endpoint, query, None).await?;
        Ok(response.json().await?)
    }

    pub async fn get_status(&self, endpoint: &str) -> ApiResult<()> {
        self.request::<(), ()>(Method::GET, endpoint, None, None).await?;
        Ok(())
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.request::<(), B>(Method::POST, endpoint, None, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn post_status<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize,
    {
        self.request::<(), B>(Method::POST, endpoint, None, Some(body)).await?;
        Ok(())
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.request::<(), B>(Method::PUT, endpoint, None, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn patch_with_query<T, Q>(&self, endpoint: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let response = self.request::<Q, ()>(Method::PATCH, endpoint, Some(query), None).await?;
        Ok(response.json().await?)
    }

    pub async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request::<(), ()>(Method::DELETE, endpoint, None, None).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_status(&self, endpoint: &str) -> ApiResult<()> {
        self.request::<(), ()>(Method::DELETE, endpoint, None, None).await?;
        Ok(())
    }

    /// POST without the bearer token or the 401 protocol. Login goes
    /// through here: a 401 on bad credentials is a plain API error, not
    /// a refresh trigger.
    pub async fn post_unauthenticated<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await
            .inspect_err(|e| error!("admin api request failed: {}", e))?;

        let response = into_api_response(response).await?;
        Ok(response.json().await?)
    }

    /// Multipart upload with the full 401 protocol. The form is rebuilt
    /// from the held bytes for every attempt.
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(endpoint);
        let response = self
            .execute(|client, token| {
                let part = reqwest::multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.to_string())
                    .mime_str(content_type)?;
                let form = reqwest::multipart::Form::new().part(field.to_string(), part);

                let mut request = client.post(&url).multipart(form);
                if let Some(token) = token {
                    request = request.bearer_auth(token);
                }
                Ok(request)
            })
            .await?;
        Ok(response.json().await?)
    }
}

/// Maps a non-2xx response to an error carrying the server's `detail`
/// message, substituting an empty object for unreadable bodies.
async fn into_api_response(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Value = response.json().await.unwrap_or_else(|_| Value::Object(Default::default()));
    let message = body
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    Err(ApiSdkError::ApiError { status: status.as_u16(), message })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::tokens::{MemoryTokenStore, NoopSessionListener, TokenManager};

    fn client(server_url: &str) -> HttpClient {
        HttpClient::new(
            ApiBaseConfig { server_url: server_url.to_string() },
            Arc::new(TokenManager::new(
                Arc::new(MemoryTokenStore::new()),
                Arc::new(NoopSessionListener),
            )),
        )
    }

    #[test]
    fn build_url_joins_slashes() {
        let client = client("http://localhost:8000/");
        assert_eq!(
            client.build_url("/api/admin/sessions"),
            "http://localhost:8000/api/admin/sessions"
        );
        assert_eq!(client.build_url("api/health"), "http://localhost:8000/api/health");
    }

    #[tokio::test]
    async fn sequence_shaped_queries_are_rejected() {
        let client = client("http://localhost:8000");
        let query = [("status", "pending")];

        let result = client
            .request::<_, ()>(Method::GET, "api/admin/sessions", Some(&query), None)
            .await;

        assert!(matches!(result, Err(ApiSdkError::SerializationError(_))));
    }
}
