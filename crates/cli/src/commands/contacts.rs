use acube::AdminClient;
use acube_core::common_types::PageQuery;
use clap::Subcommand;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// List contact form messages
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
    /// Update the status of a message (e.g. read, resolved)
    SetStatus { id: String, status: String },
    /// Delete a message
    Delete { id: String },
}

pub async fn handle_contacts(cmd: &ContactsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        ContactsCommand::List { page, limit } => list(*page, *limit, client).await,
        ContactsCommand::SetStatus { id, status } => set_status(id, status, client).await,
        ContactsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(page: u32, limit: u32, client: &AdminClient) -> Result<(), CliError> {
    let result = client.contacts().get_all(&PageQuery::new(page, limit)).await?;

    if result.data.is_empty() {
        println!("No contact messages found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|contact| {
            vec![
                contact.id.clone(),
                contact.full_name.clone(),
                contact.email.clone(),
                contact.subject.clone().unwrap_or_default(),
                contact.status.clone(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Name", "Email", "Subject", "Status"];
    let title = format!("{} of {} contact messages:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn set_status(id: &str, status: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.contacts().update_status(id, status).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.contacts().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
