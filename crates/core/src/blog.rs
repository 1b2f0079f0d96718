use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog article.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
