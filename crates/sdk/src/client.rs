use std::sync::Arc;

use serde_json::Value;

use crate::api::{
    ApiBaseConfig, ApiResult, AuditLogsApi, AuthApi, BlogsApi, ContactsApi, DashboardApi,
    EventsApi, HealthApi, JobsApi, PsychologistsApi, SearchApi, SessionsApi, SettingsApi,
    UploadApi, VolunteersApi,
    http::HttpClient,
    tokens::{MemoryTokenStore, NoopSessionListener, SessionListener, TokenManager, TokenStore},
};

pub struct CreateClientConfig {
    pub server_url: String,
    /// Durable home of the token pair; swap it out to control where
    /// credentials live.
    pub tokens: Arc<dyn TokenStore>,
    /// Runs once when the refresh token is missing or rejected.
    pub on_session_expired: Arc<dyn SessionListener>,
}

impl CreateClientConfig {
    /// Config with in-process token storage and no expiry hook.
    pub fn in_memory(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            tokens: Arc::new(MemoryTokenStore::new()),
            on_session_expired: Arc::new(NoopSessionListener),
        }
    }
}

/// Entry point to the admin API. One instance per backend origin; all
/// sub-APIs share the same gateway and token state.
#[derive(Clone)]
pub struct AdminClient {
    auth_api: AuthApi,
    dashboard_api: DashboardApi,
    sessions_api: SessionsApi,
    events_api: EventsApi,
    blogs_api: BlogsApi,
    jobs_api: JobsApi,
    psychologists_api: PsychologistsApi,
    volunteers_api: VolunteersApi,
    contacts_api: ContactsApi,
    settings_api: SettingsApi,
    audit_logs_api: AuditLogsApi,
    search_api: SearchApi,
    upload_api: UploadApi,
    health_api: Arc<HealthApi>,
}

impl AdminClient {
    pub fn new(config: CreateClientConfig) -> Self {
        let manager = Arc::new(TokenManager::new(config.tokens, config.on_session_expired));
        let client = Arc::new(HttpClient::new(
            ApiBaseConfig { server_url: config.server_url },
            Arc::clone(&manager),
        ));

        Self {
            auth_api: AuthApi::new(Arc::clone(&client)),
            dashboard_api: DashboardApi::new(Arc::clone(&client)),
            sessions_api: SessionsApi::new(Arc::clone(&client)),
            events_api: EventsApi::new(Arc::clone(&client)),
            blogs_api: BlogsApi::new(Arc::clone(&client)),
            jobs_api: JobsApi::new(Arc::clone(&client)),
            psychologists_api: PsychologistsApi::new(Arc::clone(&client)),
            volunteers_api: VolunteersApi::new(Arc::clone(&client)),
            contacts_api: ContactsApi::new(Arc::clone(&client)),
            settings_api: SettingsApi::new(Arc::clone(&client)),
            audit_logs_api: AuditLogsApi::new(Arc::clone(&client)),
            search_api: SearchApi::new(Arc::clone(&client)),
            upload_api: UploadApi::new(Arc::clone(&client)),
            health_api: Arc::new(HealthApi::new(client)),
        }
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth_api
    }

    pub fn dashboard(&self) -> &DashboardApi {
        &self.dashboard_api
    }

    pub fn sessions(&self) -> &SessionsApi {
        &self.sessions_api
    }

    pub fn events(&self) -> &EventsApi {
        &self.events_api
    }

    pub fn blogs(&self) -> &BlogsApi {
        &self.blogs_api
    }

    pub fn jobs(&self) -> &JobsApi {
        &self.jobs_api
    }

    pub fn psychologists(&self) -> &PsychologistsApi {
        &self.psychologists_api
    }

    pub fn volunteers(&self) -> &VolunteersApi {
        &self.volunteers_api
    }

    pub fn contacts(&self) -> &ContactsApi {
        &self.contacts_api
    }

    pub fn settings(&self) -> &SettingsApi {
        &self.settings_api
    }

    pub fn audit_logs(&self) -> &AuditLogsApi {
        &self.audit_logs_api
    }

    pub fn search(&self) -> &SearchApi {
        &self.search_api
    }

    pub fn uploads(&self) -> &UploadApi {
        &self.upload_api
    }

    pub async fn health(&self) -> ApiResult<()> {
        self.health_api.check().await
    }

    /// Probes the verify endpoint with the stored access token.
    pub async fn authenticated(&self) -> ApiResult<Value> {
        self.auth_api.verify().await
    }
}

pub fn create_client(config: CreateClientConfig) -> AdminClient {
    AdminClient::new(config)
}
