use std::fs;
use std::path::PathBuf;

use acube::{AdminClient, BlogListQuery};
use acube_core::{blog::BlogInput, common_types::PageQuery};
use clap::Subcommand;
use serde_json::Value;

use crate::console::{print_success_message, print_table};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum BlogsCommand {
    /// List blog articles
    List {
        #[clap(long, default_value_t = 1)]
        page: u32,

        #[clap(long, default_value_t = 10)]
        limit: u32,

        /// Only show articles in this category
        #[clap(long)]
        category: Option<String>,
    },
    /// Create an article from a JSON file
    Create { file: PathBuf },
    /// Apply a partial update from a JSON file
    Update { id: String, file: PathBuf },
    /// Delete an article
    Delete { id: String },
}

pub async fn handle_blogs(cmd: &BlogsCommand, client: &AdminClient) -> Result<(), CliError> {
    match cmd {
        BlogsCommand::List { page, limit, category } => {
            list(*page, *limit, category, client).await
        }
        BlogsCommand::Create { file } => create(file, client).await,
        BlogsCommand::Update { id, file } => update(id, file, client).await,
        BlogsCommand::Delete { id } => delete(id, client).await,
    }
}

async fn list(
    page: u32,
    limit: u32,
    category: &Option<String>,
    client: &AdminClient,
) -> Result<(), CliError> {
    let query = BlogListQuery { page: PageQuery::new(page, limit), category: category.clone() };
    let result = client.blogs().get_all(&query).await?;

    if result.data.is_empty() {
        println!("No blog articles found.");
        return Ok(());
    }

    let rows = result
        .data
        .iter()
        .map(|blog| {
            vec![
                blog.id.clone(),
                blog.title.clone(),
                blog.author.clone(),
                blog.category.clone(),
                blog.read_time.clone(),
                format!("{}", blog.featured),
            ]
        })
        .collect();

    let headers = vec!["Id", "Title", "Author", "Category", "Read Time", "Featured"];
    let title = format!("{} of {} blog articles:", result.data.len(), result.pagination.total);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn create(file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let input: BlogInput = serde_json::from_str(&fs::read_to_string(file)?)?;
    let created = client.blogs().create(&input).await?;

    print_success_message(&format!("Created blog article {}", created.blog.id));
    Ok(())
}

async fn update(id: &str, file: &PathBuf, client: &AdminClient) -> Result<(), CliError> {
    let changes: Value = serde_json::from_str(&fs::read_to_string(file)?)?;
    let response = client.blogs().update(id, &changes).await?;
    print_success_message(&response.message);
    Ok(())
}

async fn delete(id: &str, client: &AdminClient) -> Result<(), CliError> {
    let response = client.blogs().delete(id).await?;
    print_success_message(&response.message);
    Ok(())
}
