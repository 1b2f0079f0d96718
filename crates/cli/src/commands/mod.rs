pub mod audit;
pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod dashboard;
pub mod events;
pub mod jobs;
pub mod psychologists;
pub mod search;
pub mod sessions;
pub mod settings;
pub mod upload;
pub mod volunteers;
