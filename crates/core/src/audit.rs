use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the admin audit trail.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<String>,
    pub admin_email: String,
    pub details: Option<serde_json::Value>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Optional server-side filters for the audit log listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditLogFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
}
