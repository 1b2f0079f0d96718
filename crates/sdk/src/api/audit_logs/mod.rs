use std::sync::Arc;

use acube_core::{
    audit::{AuditLogEntry, AuditLogFilters},
    common_types::{PageQuery, Paginated},
};
use serde::Serialize;
use serde_json::Value;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone, Serialize, Default)]
pub struct AuditLogQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(flatten)]
    pub filters: AuditLogFilters,
}

#[derive(Clone)]
pub struct AuditLogsApi {
    client: Arc<HttpClient>,
}

impl AuditLogsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &AuditLogQuery) -> ApiResult<Paginated<AuditLogEntry>> {
        self.client.get_with_query("api/admin/audit-logs", Some(query)).await
    }

    pub async fn stats(&self) -> ApiResult<Value> {
        self.client.get("api/admin/audit-logs/stats").await
    }
}
