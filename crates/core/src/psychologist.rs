use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A practicing psychologist listed on the platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Psychologist {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub years_of_experience: u32,
    #[serde(default)]
    pub education: Vec<String>,
    pub bio: String,
    pub session_rate: f64,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PsychologistInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    pub years_of_experience: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,
    pub bio: String,
    pub session_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
