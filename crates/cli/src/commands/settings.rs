use std::fs;
use std::path::PathBuf;

use acube::AdminClient;
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_json, print_success_message};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the current platform settings
    Show,
    /// Update settings from a JSON file
    Update { file: PathBuf },
}

pub async fn handle_settings(cmd: &SettingsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        SettingsCommand::Show => show(client).await,
        SettingsCommand::Update { file } => update(file, client).await,
    }
}

async fn show(client: &AdminClient) -> Result<(), CliError> {
    let settings = client.settings().get().await?;
    print_json(&settings)?;
    Ok(())
}

async fn update(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let settings: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.settings().update(&settings).await?;
    print_success_message(&response.message);
    Ok(())
}
