use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Environment variable that selects the admin API origin.
pub const API_URL_ENV: &str = "ACUBE_API_URL";

/// Loads environment variables from a .env file in the project directory.
///
/// First attempts to load a .env file from the specified project path.
/// If that fails (file doesn't exist or cannot be read), falls back to
/// loading from the current working directory or system environment.
///
/// # Arguments
/// * `project_path` - Path to the project directory to search for .env file
pub fn load_env_from_project_path(project_path: &Path) {
    if from_path(project_path.join(".env")).is_err() {
        dotenv().ok();
    }
}

/// Resolves the admin API base URL from the environment.
///
/// An unset or empty `ACUBE_API_URL` yields None; a native client has no
/// same-origin fallback, so callers must treat None as "not configured".
pub fn api_url_from_env() -> Option<String> {
    std::env::var(API_URL_ENV).ok().filter(|value| !value.is_empty())
}
