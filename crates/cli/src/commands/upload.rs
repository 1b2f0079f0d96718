use std::fs;
use std::path::Path;

use acube::AdminClient;

use crate::console::print_success_message;
use crate::error::CliError;

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub async fn handle_upload(path: &Path, client: &AdminClient) -> Result<(), CliError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid file path: {}", path.display())))?;

    let bytes = fs::read(path)?;
    let uploaded =
        client.uploads().upload(file_name, bytes, content_type_for(path)).await?;

    print_success_message(&format!("Uploaded {} to {}", uploaded.filename, uploaded.url));
    Ok(())
}
