pub mod common_types;
mod environment;
pub use environment::{api_url_from_env, load_env_from_project_path, API_URL_ENV};
mod logger;
pub use logger::{setup_info_logger, setup_logger};

pub mod audit;
pub mod blog;
pub mod contact;
pub mod event;
pub mod job;
pub mod psychologist;
pub mod session;
pub mod volunteer;
