use std::env;
use std::sync::Arc;

use acube::{AdminClient, CreateClientConfig, create_client};
use acube_core::{load_env_from_project_path, setup_info_logger};
use clap::Parser;

use crate::authentication::check_authenticate;
use crate::cli_interface::{Cli, Commands};
use crate::commands::{
    audit, auth, blogs, contacts, dashboard, events, jobs, psychologists, search, sessions,
    settings, upload, volunteers,
};
use crate::credentials::{ExpiredSessionNotice, FileTokenStore};
use crate::error::CliError;

mod authentication;
mod cli_interface;
mod commands;
mod console;
mod credentials;
mod error;

pub use console::{print_error_message, print_success_message};

/// Builds a client for a stored profile. `ACUBE_API_URL` overrides the
/// origin recorded at login time.
pub fn build_client(profile: &str) -> Result<AdminClient, CliError> {
    let stored = credentials::load_profile(profile).map_err(|_| {
        CliError::Authentication(format!(
            "No credentials stored for profile '{}'. Run `acube auth login` first.",
            profile
        ))
    })?;

    let server_url = acube_core::api_url_from_env().unwrap_or(stored.api_url);

    Ok(create_client(CreateClientConfig {
        server_url,
        tokens: Arc::new(FileTokenStore::new(profile)),
        on_session_expired: Arc::new(ExpiredSessionNotice),
    }))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    setup_info_logger();

    if let Ok(current_dir) = env::current_dir() {
        load_env_from_project_path(&current_dir);
    }

    match &cli.command {
        Commands::Auth { command } => {
            auth::handle_auth_command(command, &cli.profile).await?;
        }
        Commands::Health => {
            let client = build_client(&cli.profile)?;
            authentication::check_api_running(&client).await?;
            print_success_message("API is reachable.");
        }
        Commands::Dashboard => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            dashboard::handle_dashboard(&client).await?;
        }
        Commands::Sessions { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            sessions::handle_sessions(command, &client).await?;
        }
        Commands::Events { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            events::handle_events(command, &client).await?;
        }
        Commands::Blogs { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            blogs::handle_blogs(command, &client).await?;
        }
        Commands::Jobs { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            jobs::handle_jobs(command, &client).await?;
        }
        Commands::Psychologists { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            psychologists::handle_psychologists(command, &client).await?;
        }
        Commands::Volunteers { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            volunteers::handle_volunteers(command, &client).await?;
        }
        Commands::Contacts { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            contacts::handle_contacts(command, &client).await?;
        }
        Commands::Settings { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            settings::handle_settings(command, &client).await?;
        }
        Commands::Audit { command } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            audit::handle_audit(command, &client).await?;
        }
        Commands::Search { query } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            search::handle_search(query, &client).await?;
        }
        Commands::Upload { path } => {
            let client = build_client(&cli.profile)?;
            check_authenticate(&client).await?;

            upload::handle_upload(path, &client).await?;
        }
    }

    Ok(())
}
