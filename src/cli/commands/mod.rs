//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `catalog`: Building, listing, and looking up videos
//! - `settings`: Showing and initializing the config file

mod catalog;
mod settings;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::catalog::SchemaPolicy;
use crate::config;
use crate::error::{Error, Result};

pub use catalog::{cmd_content_url, cmd_list, cmd_show};
pub use settings::cmd_config;

/// Environment variable consulted for the feed URL
const URL_ENV: &str = "VIDEO_CATALOG_URL";

/// Video Catalog CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Build the catalog and list its videos
    List {
        /// Feed URL (falls back to VIDEO_CATALOG_URL, then the config file)
        #[arg(env = URL_ENV)]
        url: Option<String>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
        /// Show at most this many videos
        #[arg(short, long)]
        limit: Option<usize>,
        /// Drop malformed entries instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },
    /// Show every video with the given identifier
    Show {
        /// Video identifier (ISRC)
        isrc: String,
        /// Feed URL (falls back to VIDEO_CATALOG_URL, then the config file)
        #[arg(env = URL_ENV)]
        url: Option<String>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
        /// Drop malformed entries instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },
    /// Print the playable URL derived from an identifier
    ContentUrl {
        /// Video identifier (ISRC)
        isrc: String,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = config::load();

    match &cli.command {
        Commands::List {
            url,
            json,
            limit,
            skip_malformed,
        } => {
            if *skip_malformed {
                config.catalog.schema_policy = SchemaPolicy::Skip;
            }
            let rt = Runtime::new()?;
            let url = resolve_url(url.as_deref(), &config)?;
            cmd_list(&rt, &config, &url, *json, *limit)?;
        }
        Commands::Show {
            isrc,
            url,
            json,
            skip_malformed,
        } => {
            if *skip_malformed {
                config.catalog.schema_policy = SchemaPolicy::Skip;
            }
            let rt = Runtime::new()?;
            let url = resolve_url(url.as_deref(), &config)?;
            cmd_show(&rt, &config, &url, isrc, *json)?;
        }
        Commands::ContentUrl { isrc } => cmd_content_url(isrc)?,
        Commands::Config { init } => cmd_config(&config, *init)?,
    }

    Ok(())
}

/// Pick the feed URL from the argument or the config file
fn resolve_url(arg: Option<&str>, config: &config::Config) -> Result<String> {
    arg.map(str::to_string)
        .or_else(|| config.catalog.source_url.clone())
        .ok_or_else(|| {
            Error::config(format!(
                "no feed URL given; pass one, set {}, or add catalog.source_url to the config file",
                URL_ENV
            ))
        })
}
