use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, warn};

/// Access/refresh token pair issued by the login and refresh endpoints.
///
/// Both tokens are opaque strings; nothing in the client parses or
/// validates them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Durable storage for the credential pair.
///
/// Passed into the client at construction so embedders and tests can
/// substitute their own storage without touching global state.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<TokenPair>;
    fn save(&self, tokens: &TokenPair);
    fn clear(&self);
}

/// In-process token storage. The default for embedders that log in per
/// run and keep nothing on disk.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: std::sync::Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<TokenPair> {
        self.inner.lock().unwrap().clone()
    }

    fn save(&self, tokens: &TokenPair) {
        *self.inner.lock().unwrap() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}

/// Notified exactly once when the session becomes unrecoverable (the
/// refresh token is missing or rejected) and the stored credentials have
/// already been cleared. The web client's equivalent was a hard redirect
/// to the login page.
pub trait SessionListener: Send + Sync {
    fn session_expired(&self);
}

/// Listener that ignores session expiry.
pub struct NoopSessionListener;

impl SessionListener for NoopSessionListener {
    fn session_expired(&self) {}
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

struct RefreshState {
    /// Bumped every time a refresh attempt resolves, successfully or not.
    epoch: u64,
    /// Guards the session-expired notification; reset when a new pair is
    /// installed by login.
    expired_notified: bool,
}

/// Owns the credential pair and serializes token refreshes.
///
/// The mutex is held for the full duration of the refresh network call:
/// concurrent requests that hit a 401 queue on it in FIFO order, and the
/// epoch counter tells a waiter that the refresh it was waiting for has
/// already resolved, so at most one network round trip to the refresh
/// endpoint happens per failure burst.
pub struct TokenManager {
    store: Arc<dyn TokenStore>,
    listener: Arc<dyn SessionListener>,
    state: Mutex<RefreshState>,
}

impl TokenManager {
    pub fn new(store: Arc<dyn TokenStore>, listener: Arc<dyn SessionListener>) -> Self {
        Self { store, listener, state: Mutex::new(RefreshState { epoch: 0, expired_notified: false }) }
    }

    /// The current access token (if any) together with the refresh epoch
    /// it was read under.
    pub(crate) async fn bearer(&self) -> (Option<String>, u64) {
        let state = self.state.lock().await;
        (self.store.load().map(|tokens| tokens.access_token), state.epoch)
    }

    /// The currently stored pair, if any.
    pub fn current(&self) -> Option<TokenPair> {
        self.store.load()
    }

    /// Stores a freshly issued pair (login) and re-arms expiry notification.
    pub async fn install(&self, tokens: &TokenPair) {
        let mut state = self.state.lock().await;
        self.store.save(tokens);
        state.epoch += 1;
        state.expired_notified = false;
    }

    /// Drops the stored pair without treating the session as expired (logout).
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        self.store.clear();
        state.epoch += 1;
    }

    /// Exchanges the stored refresh token for a new pair.
    ///
    /// `observed_epoch` is the epoch the caller read its access token
    /// under. If another caller already resolved a refresh since then,
    /// no network call is made and that refresh's outcome is reused.
    ///
    /// Returns the new access token, or None when the session is gone
    /// (stored tokens cleared, listener notified).
    pub(crate) async fn refresh(
        &self,
        http: &reqwest::Client,
        refresh_url: &str,
        observed_epoch: u64,
    ) -> Option<String> {
        let mut state = self.state.lock().await;

        if state.epoch != observed_epoch {
            return self.store.load().map(|tokens| tokens.access_token);
        }

        let Some(current) = self.store.load().filter(|t| !t.refresh_token.is_empty()) else {
            self.expire_session(&mut state);
            return None;
        };

        let result = http
            .post(refresh_url)
            .json(&RefreshRequest { refresh_token: &current.refresh_token })
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<TokenPair>().await {
                    Ok(rotated) => {
                        self.store.save(&rotated);
                        state.epoch += 1;
                        Some(rotated.access_token)
                    }
                    Err(e) => {
                        error!("token refresh returned an unreadable body: {}", e);
                        self.expire_session(&mut state);
                        None
                    }
                }
            }
            Ok(response) => {
                warn!("token refresh rejected with status {}", response.status());
                self.expire_session(&mut state);
                None
            }
            Err(e) => {
                error!("token refresh failed: {}", e);
                self.expire_session(&mut state);
                None
            }
        }
    }

    fn expire_session(&self, state: &mut RefreshState) {
        self.store.clear();
        state.epoch += 1;
        if !state.expired_notified {
            state.expired_notified = true;
            self.listener.session_expired();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        let pair =
            TokenPair { access_token: "access".to_string(), refresh_token: "refresh".to_string() };
        store.save(&pair);
        assert_eq!(store.load().unwrap().access_token, "access");

        store.clear();
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn install_bumps_epoch_and_rearms_notification() {
        let manager = TokenManager::new(
            Arc::new(MemoryTokenStore::new()),
            Arc::new(NoopSessionListener),
        );

        let (token, epoch) = manager.bearer().await;
        assert!(token.is_none());

        let pair = TokenPair { access_token: "a1".to_string(), refresh_token: "r1".to_string() };
        manager.install(&pair).await;

        let (token, new_epoch) = manager.bearer().await;
        assert_eq!(token.as_deref(), Some("a1"));
        assert!(new_epoch > epoch);
    }
}
