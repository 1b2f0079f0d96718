use std::fs;
use std::path::PathBuf;

use acube::AdminClient;
use acube_core::{common_types::PageQuery, event::EventInput};
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List events
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
    /// Create an event from a JSON file
    Create { file: PathBuf },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    /// Delete an event
    Delete { id: String },
}

pub async fn handle_events(cmd: &EventsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        EventsCommand::List { page, limit } => list(*page, *limit, client).await,
        EventsCommand::Create { file } => create(file, client).await,
        EventsCommand::Update { id, file } => update(id, file, client).await,
        EventsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(page: u32, limit: u32, client: &AdminClient) -> Result<(), CliError> {
    let result = client.events().get_all(&PageQuery::new(page, limit)).await?;

    if result.data.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|event| {
            let status = if event.is_active { "Active" } else { "Inactive" };
            vec![
                event.id.clone(),
                event.title.clone(),
                event.event_type.clone(),
                format!("{} {}", event.date, event.time),
                event.price.clone(),
                status.to_string(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Title", "Type", "When", "Price", "Status"];
    let title = format!("{} of {} events:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn create(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let input: EventInput = serde_json::from_str(&fs::read_to_string(file)?)?;
    let created = client.events().create(&input).await?;

    print_success_message(&format!("Created event {}", created.event.id));
    Ok(())
}

async fn update(id: &str, file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let changes: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.events().update(id, &changes).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.events().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
