use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bingserp", version, about = "Paginated Bing result scraper")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search Bing and print the collected results
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results to return
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Path to config file (overrides default search)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// URL of the JSON credential document
        #[arg(long)]
        credential_url: Option<String>,

        /// Skip the credential document and use the fallback cookie
        #[arg(long)]
        skip_credential_doc: bool,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Fetch the credential document and report its age
    Credential {
        /// Path to config file (overrides default search)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// URL of the JSON credential document
        #[arg(long)]
        credential_url: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// Numbered plain-text list
    Text,
}

impl Commands {
    /// Explicit `--config` path, if one was given.
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Search { config, .. } | Commands::Credential { config, .. } => {
                config.as_ref()
            }
        }
    }
}
