use acube::AdminClient;

use crate::error::CliError;
use crate::print_error_message;

pub async fn check_api_running(client: &AdminClient) -> Result<(), CliError> {
    match client.health().await {
        Ok(_) => Ok(()),
        Err(e) => {
            print_error_message("Error: API server is not running or is unreachable.");
            print_error_message(&format!("Details: {}", e));

            Err(CliError::Api(
                "The API server is not running. Please start it before continuing.".to_string(),
            ))
        }
    }
}

pub async fn check_authenticate(client: &AdminClient) -> Result<(), CliError> {
    check_api_running(client).await?;

    match client.authenticated().await {
        Ok(_) => Ok(()),
        Err(e) => {
            print_error_message(&format!("Authentication failed: {}", e));
            print_error_message("Run `acube auth login` to sign in.");
            Err(CliError::Authentication(format!("Authentication failed: {}", e)))
        }
    }
}
