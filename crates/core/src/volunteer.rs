use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A volunteer application submitted through the public site.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Volunteer {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub areas_of_interest: Option<Vec<String>>,
    pub availability: Option<String>,
    pub motivation: Option<String>,
    #[serde(default = "default_volunteer_status")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_volunteer_status() -> String {
    "pending".to_string()
}
