use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::api::{
    http::HttpClient,
    tokens::{TokenManager, TokenPair},
    types::ApiResult,
};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct AuthApi {
    client: Arc<HttpClient>,
}

impl AuthApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn tokens(&self) -> &Arc<TokenManager> {
        self.client.tokens()
    }

    /// Signs in and installs the issued token pair, so the next
    /// protected call goes out with the fresh access token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenPair> {
        let pair: TokenPair = self
            .client
            .post_unauthenticated("api/admin/auth/login", &LoginRequest { email, password })
            .await?;
        self.tokens().install(&pair).await;
        Ok(pair)
    }

    /// Revokes the refresh token server-side (best effort; a failed
    /// revocation is logged and ignored) and drops the stored pair.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Some(tokens) = self.tokens().current() {
            let body = json!({ "refresh_token": tokens.refresh_token });
            if let Err(e) = self.client.post_status("api/admin/auth/logout", &body).await {
                warn!("logout request failed: {}", e);
            }
        }
        self.tokens().clear().await;
        Ok(())
    }

    /// Asks the backend whether the current access token is accepted.
    pub async fn verify(&self) -> ApiResult<Value> {
        self.client.get("api/admin/auth/verify").await
    }

    /// The admin account behind the current session.
    pub async fn me(&self) -> ApiResult<Value> {
        self.client.get("api/admin/me").await
    }
}
