use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "routedeck")]
#[command(about = "Manage a remote routes collection from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the collection endpoint (falls back to ROUTEDECK_URL,
    /// then the config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Form fields for create and update. Numeric values are passed through as
/// text so validation happens in one place, with one message per field.
#[derive(Args, Debug, Clone, Default)]
pub struct RouteFieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub coord_x: Option<String>,

    #[arg(long)]
    pub coord_y: Option<String>,

    #[arg(long)]
    pub from_name: Option<String>,

    #[arg(long)]
    pub from_x: Option<String>,

    #[arg(long)]
    pub from_y: Option<String>,

    #[arg(long)]
    pub to_name: Option<String>,

    #[arg(long)]
    pub to_x: Option<String>,

    #[arg(long)]
    pub to_y: Option<String>,

    #[arg(long)]
    pub distance: Option<String>,

    #[arg(long)]
    pub rating: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show one page of the routes collection")]
    List {
        /// Name filter (case-insensitive substring)
        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = "0")]
        page: usize,

        #[arg(long)]
        size: Option<usize>,
    },

    #[command(about = "Show a single route by id")]
    Show { id: i64 },

    #[command(about = "Create a new route")]
    Create {
        #[command(flatten)]
        fields: RouteFieldArgs,
    },

    #[command(about = "Update an existing route")]
    Update {
        id: i64,

        #[command(flatten)]
        fields: RouteFieldArgs,
    },

    #[command(about = "Delete a route")]
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    #[command(about = "Live list view, re-synchronized on a fixed interval")]
    Watch {
        /// Name filter (case-insensitive substring)
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        size: Option<usize>,
    },
}
