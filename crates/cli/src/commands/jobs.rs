use std::fs;
use std::path::PathBuf;

use acube::AdminClient;
use acube_core::{common_types::PageQuery, job::JobInput};
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List career postings
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
    /// Create a posting from a JSON file
    Create { file: PathBuf },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    /// Delete a posting
    Delete { id: String },
}

pub async fn handle_jobs(cmd: &JobsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        JobsCommand::List { page, limit } => list(*page, *limit, client).await,
        JobsCommand::Create { file } => create(file, client).await,
        JobsCommand::Update { id, file } => update(id, file, client).await,
        JobsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(page: u32, limit: u32, client: &AdminClient) -> Result<(), CliError> {
    let result = client.jobs().get_all(&PageQuery::new(page, limit)).await?;

    if result.data.is_empty() {
        println!("No career postings found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|job| {
            let status = if job.is_active { "Open" } else { "Closed" };
            vec![
                job.id.clone(),
                job.title.clone(),
                job.department.clone(),
                job.location.clone(),
                job.employment_type.clone(),
                status.to_string(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Title", "Department", "Location", "Type", "Status"];
    let title = format!("{} of {} career postings:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn create(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let input: JobInput = serde_json::from_str(&fs::read_to_string(file)?)?;
    let created = client.jobs().create(&input).await?;

    print_success_message(&format!("Created career posting {}", created.job.id));
    Ok(())
}

async fn update(id: &str, file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let changes: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.jobs().update(id, &changes).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.jobs().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
