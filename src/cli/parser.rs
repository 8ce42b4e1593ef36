use crate::export::ExportFormat;
use crate::models::Status;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for techtrack
/// CLI application to track the technologies you are learning
#[derive(Parser)]
#[command(
    name = "techtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple technology tracker CLI: statuses, notes, tags and progress statistics over a JSON store",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a custom store document)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Status filter for listing: `all` disables the status criterion.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusFilter {
    All,
    NotStarted,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub fn to_status(self) -> Option<Status> {
        match self {
            StatusFilter::All => None,
            StatusFilter::NotStarted => Some(Status::NotStarted),
            StatusFilter::InProgress => Some(Status::InProgress),
            StatusFilter::Completed => Some(Status::Completed),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the seeded store
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// List technologies, optionally filtered
    List {
        #[arg(long, short, help = "Case-insensitive search on title and description")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "all", help = "Filter by status")]
        status: StatusFilter,
    },

    /// Interactive search: type to filter, results render after a quiet period
    Search,

    /// Add a new technology
    Add {
        /// Display title
        title: String,

        #[arg(long, short, help = "Free-text description")]
        description: String,

        #[arg(long, short, help = "Category (defaults to the configured one)")]
        category: Option<String>,

        #[arg(long = "tag", value_name = "TAG", help = "Tag (repeatable, max 10)")]
        tags: Vec<String>,

        #[arg(
            long = "resource",
            value_name = "URL",
            help = "Learning resource URL (repeatable)"
        )]
        resources: Vec<String>,

        #[arg(long, help = "Create the item as in-progress instead of not-started")]
        start: bool,
    },

    /// Set the status of one or more technologies
    Status {
        /// New status
        #[arg(value_enum)]
        status: Status,

        #[arg(
            long = "id",
            value_name = "ID",
            value_delimiter = ',',
            help = "Item id (repeatable or comma-separated)"
        )]
        ids: Vec<i64>,

        #[arg(long, conflicts_with = "ids", help = "Apply to every technology")]
        all: bool,
    },

    /// Set or clear the notes of a technology
    Notes {
        id: i64,

        /// Notes text (omit together with --clear to empty the field)
        text: Option<String>,

        #[arg(long, conflicts_with = "text", help = "Clear the notes field")]
        clear: bool,
    },

    /// Add or remove a tag on a technology
    Tag {
        id: i64,

        #[arg(long, value_name = "TAG")]
        add: Option<String>,

        #[arg(long, value_name = "TAG", conflicts_with = "add")]
        remove: Option<String>,
    },

    /// Add or remove a learning resource URL on a technology
    Resource {
        id: i64,

        #[arg(long, value_name = "URL")]
        add: Option<String>,

        #[arg(long, value_name = "URL", conflicts_with = "add")]
        remove: Option<String>,
    },

    /// Pick a random not-started technology and mark it in-progress
    Pick {
        #[arg(long = "dry-run", help = "Only show the pick, do not change its status")]
        dry_run: bool,
    },

    /// Show progress statistics
    Stats {
        #[arg(long = "by-category", help = "Include the per-category breakdown")]
        by_category: bool,
    },

    /// Export the technology list
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: technologies_<date>.json)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import a technology list, fully replacing the store
    Import {
        /// JSON file to import
        file: String,
    },

    /// Delete every technology (removes the store document)
    Clear {
        #[arg(long, help = "Do not ask for confirmation")]
        yes: bool,
    },
}
