mod api;
mod client;

pub use api::{
    ApiBaseConfig, ApiResult, ApiSdkError, AuditLogQuery, AuditLogsApi, AuthApi, BlogCreated,
    BlogListQuery, BlogsApi, ContactsApi, DashboardApi, EventCreated, EventsApi, HealthApi,
    JobCreated, JobsApi, MessageResponse, PsychologistCreated, PsychologistsApi, SearchApi,
    SessionCreated, SessionListQuery, SessionsApi, SettingsApi, UploadApi, UploadResult,
    VolunteersApi,
    tokens::{
        MemoryTokenStore, NoopSessionListener, SessionListener, TokenManager, TokenPair,
        TokenStore,
    },
};
pub use client::{AdminClient, CreateClientConfig, create_client};
