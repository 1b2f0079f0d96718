use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A therapy session booking as stored by the platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionBooking {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub therapy_type: String,
    pub concerns: Vec<String>,
    pub current_feelings: String,
    pub previous_therapy: String,
    pub preferred_time: String,
    pub additional_info: Option<String>,
    pub consent: bool,
    #[serde(default = "default_session_status")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_session_status() -> String {
    "pending".to_string()
}

/// Payload for creating a session booking; the backend assigns id,
/// status and timestamps.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionBookingInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub therapy_type: String,
    pub concerns: Vec<String>,
    pub current_feelings: String,
    pub previous_therapy: String,
    pub preferred_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub consent: bool,
}
