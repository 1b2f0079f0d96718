mod audit_logs;
mod auth;
mod blogs;
mod contacts;
mod dashboard;
mod events;
pub mod http;
mod jobs;
mod psychologists;
mod search;
mod sessions;
mod settings;
pub mod tokens;
mod types;
pub use types::{ApiResult, ApiSdkError, MessageResponse};
mod upload;
mod volunteers;

pub struct HealthApi {
    client: Arc<HttpClient>,
}

impl HealthApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn check(&self) -> ApiResult<()> {
        self.client.get_status("api/health").await
    }
}

pub use audit_logs::{AuditLogQuery, AuditLogsApi};
pub use auth::AuthApi;
pub use blogs::{BlogCreated, BlogListQuery, BlogsApi};
pub use contacts::ContactsApi;
pub use dashboard::DashboardApi;
pub use events::{EventCreated, EventsApi};
pub use jobs::{JobCreated, JobsApi};
pub use psychologists::{PsychologistCreated, PsychologistsApi};
pub use search::SearchApi;
pub use sessions::{SessionCreated, SessionListQuery, SessionsApi};
pub use settings::SettingsApi;
pub use types::ApiBaseConfig;
pub use upload::{UploadApi, UploadResult};
pub use volunteers::VolunteersApi;

use crate::api::http::HttpClient;
use std::sync::Arc;
