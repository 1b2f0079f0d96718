use std::fs;
use std::path::PathBuf;

use acube::{SessionListener, TokenPair, TokenStore};
use serde::{Deserialize, Serialize};

use crate::console::{print_error_message, print_warn_message};

fn get_storage_dir() -> Result<PathBuf, CredentialError> {
    let home_dir = dirs::home_dir().ok_or(CredentialError::NotFound)?;
    let storage_dir = home_dir.join(".acube");
    if !storage_dir.exists() {
        fs::create_dir_all(&storage_dir)
            .map_err(|e| CredentialError::Io(format!("Failed to create directory: {}", e)))?;
    }
    Ok(storage_dir)
}

/// One credential profile: the backend origin plus the stored token pair.
///
/// The token keys match the names the admin web client used for its
/// durable storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub api_url: String,
    #[serde(rename = "adminToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(rename = "adminRefreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[derive(Debug)]
pub enum CredentialError {
    Io(String),
    Json(serde_json::Error),
    NotFound,
}

impl From<serde_json::Error> for CredentialError {
    fn from(err: serde_json::Error) -> Self {
        CredentialError::Json(err)
    }
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialError::Io(err) => write!(f, "IO error: {}", err),
            CredentialError::Json(err) => write!(f, "JSON error: {}", err),
            CredentialError::NotFound => write!(f, "Credentials not found"),
        }
    }
}

impl std::error::Error for CredentialError {}

pub fn store_profile(profile_name: &str, profile: &StoredProfile) -> Result<(), CredentialError> {
    let storage_dir = get_storage_dir()?;
    let file_path = storage_dir.join(format!("{}.json", profile_name));
    let json_data = serde_json::to_string_pretty(profile)?;
    fs::write(file_path, json_data)
        .map_err(|e| CredentialError::Io(format!("Failed to write credentials: {}", e)))?;
    Ok(())
}

pub fn load_profile(profile_name: &str) -> Result<StoredProfile, CredentialError> {
    let storage_dir = get_storage_dir()?;
    let file_path = storage_dir.join(format!("{}.json", profile_name));
    if !file_path.exists() {
        return Err(CredentialError::NotFound);
    }
    let json_data = fs::read_to_string(file_path)
        .map_err(|e| CredentialError::Io(format!("Failed to read credentials: {}", e)))?;
    let profile: StoredProfile = serde_json::from_str(&json_data)?;
    Ok(profile)
}

pub fn delete_profile(profile_name: &str) -> Result<(), CredentialError> {
    let storage_dir = get_storage_dir()?;
    let file_path = storage_dir.join(format!("{}.json", profile_name));
    if file_path.exists() {
        fs::remove_file(file_path)
            .map_err(|e| CredentialError::Io(format!("Failed to delete credentials: {}", e)))?;
    }
    Ok(())
}

pub fn list_profiles() -> Result<Vec<String>, CredentialError> {
    let mut profiles = Vec::new();
    let storage_dir = get_storage_dir()?;

    if let Ok(entries) = fs::read_dir(storage_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension() == Some(std::ffi::OsStr::new("json")) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    profiles.push(stem.to_string());
                }
            }
        }
    }

    profiles.sort();
    Ok(profiles)
}

/// Token storage backed by the profile file; the home of the pair the
/// SDK's gateway reads and rotates.
pub struct FileTokenStore {
    profile: String,
}

impl FileTokenStore {
    pub fn new(profile: &str) -> Self {
        Self { profile: profile.to_string() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<TokenPair> {
        let profile = load_profile(&self.profile).ok()?;
        match (profile.access_token, profile.refresh_token) {
            (Some(access_token), Some(refresh_token)) => {
                Some(TokenPair { access_token, refresh_token })
            }
            _ => None,
        }
    }

    fn save(&self, tokens: &TokenPair) {
        let Ok(mut profile) = load_profile(&self.profile) else {
            print_error_message(&format!(
                "Cannot store tokens: profile '{}' does not exist.",
                self.profile
            ));
            return;
        };
        profile.access_token = Some(tokens.access_token.clone());
        profile.refresh_token = Some(tokens.refresh_token.clone());
        if let Err(e) = store_profile(&self.profile, &profile) {
            print_error_message(&format!("Failed to store tokens: {}", e));
        }
    }

    fn clear(&self) {
        let Ok(mut profile) = load_profile(&self.profile) else {
            return;
        };
        profile.access_token = None;
        profile.refresh_token = None;
        if let Err(e) = store_profile(&self.profile, &profile) {
            print_error_message(&format!("Failed to clear tokens: {}", e));
        }
    }
}

/// Tells the operator their session is gone; the SDK has already wiped
/// the stored pair by the time this runs.
pub struct ExpiredSessionNotice;

impl SessionListener for ExpiredSessionNotice {
    fn session_expired(&self) {
        print_warn_message("Session expired. Run `acube auth login` to sign in again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_uses_the_admin_storage_keys() {
        let profile = StoredProfile {
            api_url: "https://api.acube.example".to_string(),
            access_token: Some("a1".to_string()),
            refresh_token: Some("r1".to_string()),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"adminToken\":\"a1\""));
        assert!(json.contains("\"adminRefreshToken\":\"r1\""));

        let parsed: StoredProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("a1"));
    }

    #[test]
    fn signed_out_profile_omits_token_keys() {
        let profile = StoredProfile {
            api_url: "https://api.acube.example".to_string(),
            access_token: None,
            refresh_token: None,
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("adminToken"));
        assert!(!json.contains("adminRefreshToken"));
    }
}
