use std::fs;
use std::path::PathBuf;

use acube::AdminClient;
use acube_core::{common_types::PageQuery, psychologist::PsychologistInput};
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum PsychologistsCommand {
    /// List psychologist profiles
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
    /// Create a profile from a JSON file
    Create { file: PathBuf },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    /// Delete a profile
    Delete { id: String },
}

pub async fn handle_psychologists(
    cmd: &PsychologistsCommand,
    client: &AdminClient,
) -> Result<(), CliError> {
    match cmd {
        PsychologistsCommand::List { page, limit } => list(*page, *limit, client).await,
        PsychologistsCommand::Create { file } => create(file, client).await,
        PsychologistsCommand::Update { id, file } => update(id, file, client).await,
        PsychologistsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(page: u32, limit: u32, client: &AdminClient) -> Result<(), CliError> {
    let result = client.psychologists().get_all(&PageQuery::new(page, limit)).await?;

    if result.data.is_empty() {
        println!("No psychologist profiles found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|psychologist| {
            vec![
                psychologist.id.clone(),
                psychologist.full_name.clone(),
                psychologist.license_number.clone(),
                psychologist.specializations.join(", "),
                format!("{} yrs", psychologist.years_of_experience),
                format!("{:.2}", psychologist.session_rate),
            ]
        })
        .collect();

    let headers = vec!["Id", "Name", "License", "Specializations", "Experience", "Rate"];
    let title =
        format!("{} of {} psychologist profiles:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn create(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let input: PsychologistInput = serde_json::from_str(&fs::read_to_string(file)?)?;
    let created = client.psychologists().create(&input).await?;

    print_success_message(&format!("Created psychologist profile {}", created.psychologist.id));
    Ok(())
}

async fn update(id: &str, file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let changes: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.psychologists().update(id, &changes).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.psychologists().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
