use acube::AdminClient;

use crate::console::print_json;
use crate::error::CliError;

pub async fn handle_search(query: &str, client: &AdminClient) -> Result<(), CliError> {
    let results = client.search().query(query).await?;
    print_json(&results)?;
    Ok(())
}
