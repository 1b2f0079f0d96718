use acube::AdminClient;
use acube_core::common_types::PageQuery;
use clap::Subcommand;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum VolunteersCommand {
    /// List volunteer applications
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
    /// Update the status of an application
    SetStatus { id: String, status: String },
    /// Delete an application
    Delete { id: String },
}

pub async fn handle_volunteers(
    cmd: &VolunteersCommand,
    client: &AdminClient,
) -> Result<(), CliError> {
    match cmd {
        VolunteersCommand::List { page, limit } => list(*page, *limit, client).await,
        VolunteersCommand::SetStatus { id, status } => set_status(id, status, client).await,
        VolunteersCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(page: u32, limit: u32, client: &AdminClient) -> Result<(), CliError> {
    let result = client.volunteers().get_all(&PageQuery::new(page, limit)).await?;

    if result.data.is_empty() {
        println!("No volunteer applications found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|volunteer| {
            vec![
                volunteer.id.clone(),
                volunteer.full_name.clone(),
                volunteer.email.clone(),
                volunteer.availability.clone().unwrap_or_default(),
                volunteer.status.clone(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Name", "Email", "Availability", "Status"];
    let title =
        format!("{} of {} volunteer applications:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn set_status(id: &str, status: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.volunteers().update_status(id, status).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.volunteers().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
