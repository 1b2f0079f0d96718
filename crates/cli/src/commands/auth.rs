use clap::Subcommand;
use dialoguer::{Input, Password};
use regex::Regex;

use crate::console::{print_success_message, print_warn_message};
use crate::credentials::{self, StoredProfile};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Sign in to the admin API and store the issued tokens
    Login {
        /// Backend origin, e.g. https://api.acube.example
        #[clap(long)]
        api_url: Option<String>,

        /// Admin account email; prompted for when omitted
        #[clap(long)]
        email: Option<String>,
    },
    /// Revoke the stored session and drop the local tokens
    Logout,
    /// Check the stored session for the selected profile
    Status,
    /// Remove the profile file entirely, including the stored origin
    Forget,
}

pub async fn handle_auth_command(cmd: &AuthCommand, profile: &str) -> Result<(), CliError> {
    match cmd {
        AuthCommand::Login { api_url, email } => login(api_url, email, profile).await,
        AuthCommand::Logout => logout(profile).await,
        AuthCommand::Status => status(profile).await,
        AuthCommand::Forget => forget(profile),
    }
}

async fn login(
    api_url: &Option<String>,
    email: &Option<String>,
    profile: &str,
) -> Result<(), CliError> {
    let api_url = api_url
        .clone()
        .or_else(acube_core::api_url_from_env)
        .or_else(|| credentials::load_profile(profile).ok().map(|p| p.api_url))
        .ok_or_else(|| {
            CliError::InvalidInput(
                "No API url configured. Pass --api-url or set ACUBE_API_URL.".to_string(),
            )
        })?;

    let email = match email {
        Some(email) => email.clone(),
        None => {
            let email_format = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex");
            Input::new()
                .with_prompt("Email")
                .validate_with(move |value: &String| {
                    if email_format.is_match(value) {
                        Ok(())
                    } else {
                        Err("Enter a valid email address")
                    }
                })
                .interact_text()?
        }
    };

    let password = Password::new().with_prompt("Password").interact()?;

    // The profile file must exist before login so the token store has a
    // home for the issued pair.
    credentials::store_profile(
        profile,
        &StoredProfile { api_url: api_url.clone(), access_token: None, refresh_token: None },
    )?;

    let client = crate::build_client(profile)?;
    client.auth().login(&email, &password).await?;

    print_success_message(&format!("Logged in. Tokens stored for profile '{}'.", profile));
    Ok(())
}

async fn logout(profile: &str) -> Result<(), CliError> {
    let client = crate::build_client(profile)?;
    client.auth().logout().await?;

    print_success_message("Logged out.");
    Ok(())
}

fn forget(profile: &str) -> Result<(), CliError> {
    credentials::delete_profile(profile)?;
    print_success_message(&format!("Removed profile '{}'.", profile));
    Ok(())
}

async fn status(profile: &str) -> Result<(), CliError> {
    match credentials::load_profile(profile) {
        Ok(stored) if stored.refresh_token.is_some() => {
            let client = crate::build_client(profile)?;
            match client.authenticated().await {
                Ok(_) => print_success_message(&format!(
                    "Profile '{}' has a valid session against {}.",
                    profile, stored.api_url
                )),
                Err(e) => print_warn_message(&format!(
                    "Profile '{}' has stored tokens but the session is not accepted: {}",
                    profile, e
                )),
            }
        }
        Ok(stored) => {
            println!("Profile '{}' points at {} but has no stored session.", profile, stored.api_url);
        }
        Err(_) => {
            println!("No credentials stored for profile '{}'.", profile);
            let profiles = credentials::list_profiles().unwrap_or_default();
            if !profiles.is_empty() {
                println!("Known profiles: {}", profiles.join(", "));
            }
        }
    }
    Ok(())
}
