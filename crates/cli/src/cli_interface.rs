use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    audit::AuditCommand, auth::AuthCommand, blogs::BlogsCommand, contacts::ContactsCommand,
    events::EventsCommand, jobs::JobsCommand, psychologists::PsychologistsCommand,
    sessions::SessionsCommand, settings::SettingsCommand, volunteers::VolunteersCommand,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Credential profile to use
    #[clap(long, short, global = true, default_value = "default")]
    pub profile: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and out of the admin API
    Auth {
        #[clap(subcommand)]
        command: AuthCommand,
    },
    /// Show the admin dashboard summary
    Dashboard,
    /// Manage therapy session bookings
    Sessions {
        #[clap(subcommand)]
        command: SessionsCommand,
    },
    /// Manage workshops and community events
    Events {
        #[clap(subcommand)]
        command: EventsCommand,
    },
    /// Manage blog articles
    Blogs {
        #[clap(subcommand)]
        command: BlogsCommand,
    },
    /// Manage career postings
    Jobs {
        #[clap(subcommand)]
        command: JobsCommand,
    },
    /// Manage psychologist profiles
    Psychologists {
        #[clap(subcommand)]
        command: PsychologistsCommand,
    },
    /// Review volunteer applications
    Volunteers {
        #[clap(subcommand)]
        command: VolunteersCommand,
    },
    /// Review contact form messages
    Contacts {
        #[clap(subcommand)]
        command: ContactsCommand,
    },
    /// Read or update platform settings
    Settings {
        #[clap(subcommand)]
        command: SettingsCommand,
    },
    /// Inspect the admin audit trail
    Audit {
        #[clap(subcommand)]
        command: AuditCommand,
    },
    /// Search across admin entities
    Search {
        /// The search term
        query: String,
    },
    /// Upload a file to the media store
    Upload {
        /// Path of the file to upload
        path: PathBuf,
    },
    /// Check that the API is reachable
    Health,
}
