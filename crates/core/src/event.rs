use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workshop, webinar or community event.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub is_paid: bool,
    pub schedule: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub max_participants: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub is_paid: bool,
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}
