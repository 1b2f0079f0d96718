use std::fs;
use std::path::PathBuf;

use acube::{AdminClient, SessionListQuery};
use acube_core::{common_types::PageQuery, session::SessionBookingInput};
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum SessionsCommand {
    /// List session bookings
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,

        /// Only show bookings with this status
        #[clap(long)]
        status: Option<String>,
    },
    /// Create a booking from a JSON file
    Create {
        /// Path to a JSON file with the booking payload
        file: PathBuf,
    },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    /// Update the status of a booking
    SetStatus { id: String, status: String },
    /// Delete a booking
    Delete { id: String },
}

pub async fn handle_sessions(cmd: &SessionsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        SessionsCommand::List { page, limit, status } => {
            list(*page, *limit, status, client).await
        }
        SessionsCommand::Create { file } => create(file, client).await,
        SessionsCommand::Update { id, file } => update(id, file, client).await,
        SessionsCommand::SetStatus { id, status } => set_status(id, status, client).await,
        SessionsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(
    page: u32,
    limit: u32,
    status: &Option<String>,
    client: &AdminClient,
) -> Result<(), CliError> {
    let query =
        SessionListQuery { page: PageQuery::new(page, limit), status_filter: status.clone() };
    let result = client.sessions().get_all(&query).await?;

    if result.data.is_empty() {
        println!("No session bookings found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|booking| {
            vec![
                booking.id.clone(),
                booking.full_name.clone(),
                booking.email.clone(),
                booking.therapy_type.clone(),
                booking.preferred_time.clone(),
                booking.status.clone(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Name", "Email", "Therapy", "Preferred Time", "Status"];
    let title = format!("{} of {} session bookings:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn create(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let input: SessionBookingInput = serde_json::from_str(&fs::read_to_string(file)?)?;
    let created = client.sessions().create(&input).await?;

    print_success_message(&format!("Created session booking {}", created.session.id));
    Ok(())
}

async fn update(id: &str, file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let changes: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.sessions().update(id, &changes).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn set_status(id: &str, status: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.sessions().update_status(id, status).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.sessions().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
