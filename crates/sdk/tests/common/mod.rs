#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use acube::{
    AdminClient, CreateClientConfig, MemoryTokenStore, SessionListener, TokenPair, TokenStore,
};

/// Counts session-expiry notifications so tests can assert the hook ran
/// exactly once.
pub struct CountingListener {
    expiries: AtomicUsize,
}

impl CountingListener {
    pub fn new() -> Self {
        Self { expiries: AtomicUsize::new(0) }
    }

    pub fn count(&self) -> usize {
        self.expiries.load(Ordering::SeqCst)
    }
}

impl SessionListener for CountingListener {
    fn session_expired(&self) {
        self.expiries.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub client: AdminClient,
    pub store: Arc<MemoryTokenStore>,
    pub listener: Arc<CountingListener>,
}

pub fn client_with_tokens(server_url: &str, tokens: Option<TokenPair>) -> Harness {
    let store = Arc::new(MemoryTokenStore::new());
    if let Some(tokens) = &tokens {
        store.save(tokens);
    }
    let listener = Arc::new(CountingListener::new());
    let client = AdminClient::new(CreateClientConfig {
        server_url: server_url.to_string(),
        tokens: store.clone(),
        on_session_expired: listener.clone(),
    });
    Harness { client, store, listener }
}

pub fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair { access_token: access.to_string(), refresh_token: refresh.to_string() }
}
