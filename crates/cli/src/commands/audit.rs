use acube::{AdminClient, AuditLogQuery};
use acube_core::{audit::AuditLogFilters, common_types::PageQuery};
use clap::Subcommand;

use crate::console::{print_json, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum AuditCommand {
    /// List audit log entries
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 50)]
        limit: u32,

        /// Only show entries for this action (create, update, delete, ...)
        #[clap(long)]
        action: Option<String>,

        /// Only show entries touching this entity type
        #[clap(long)]
        entity: Option<String>,

        /// Only show entries by this admin
        #[clap(long)]
        admin_email: Option<String>,
    },
    /// Show aggregate audit statistics
    Stats,
}

pub async fn handle_audit(cmd: &AuditCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        AuditCommand::List { page, limit, action, entity, admin_email } => {
            let query = AuditLogQuery {
                page: PageQuery::new(*page, *limit),
                filters: AuditLogFilters {
                    action: action.clone(),
                    entity: entity.clone(),
                    admin_email: admin_email.clone(),
                },
            };
            list(&query, client).await
        }
        AuditCommand::Stats => stats(client).await,
    }
}

async fn list(query: &AuditLogQuery, client: &AdminClient) -> Result<(), CliError> {
    let result = client.audit_logs().get_all(query).await?;

    if result.data.is_empty() {
        println!("No audit log entries found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|entry| {
            let timestamp = entry
                .timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            vec![
                timestamp,
                entry.admin_email.clone(),
                entry.action.clone(),
                entry.entity.clone(),
                entry.entity_id.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let headers = vec!["Timestamp", "Admin", "Action", "Entity", "Entity Id"];
    let title = format!("{} of {} audit entries:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn stats(client: &AdminClient) -> Result<(), CliError> {
    let stats = client.audit_logs().stats().await?;
    print_json(&stats)?;
    Ok(())
}
