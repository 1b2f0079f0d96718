use acube::AdminClient;

use crate::console::print_json;
use crate::error::CliError;

pub async fn handle_dashboard(client: &AdminClient) -> Result<(), CliError> {
    let dashboard = client.dashboard().get().await?;
    print_json(&dashboard)?;
    Ok(())
}
