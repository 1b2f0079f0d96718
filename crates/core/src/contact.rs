use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactMessage {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(default = "default_contact_status")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_contact_status() -> String {
    "unread".to_string()
}
