use crate::config::CONFIG_ENV;
use crate::store::StoreBackend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neon-nexus", author, version, about, long_about = None)]
/// Neon Nexus site engine: render the site, manage the asset vault, validate contact submissions.
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Key-value store file holding the asset vault
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Store backend: json or sqlite
    #[arg(long, global = true, value_name = "BACKEND")]
    pub backend: Option<StoreBackend>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the full page to index.html
    Render {
        /// Output directory; prints to stdout when omitted
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Learning-track filter: all, design, development or strategy
        #[arg(long)]
        filter: Option<String>,

        /// Asset search query applied to the vault listing
        #[arg(long)]
        query: Option<String>,
    },
    /// Manage the asset vault
    Assets {
        #[command(subcommand)]
        action: AssetAction,
    },
    /// Validate a contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Run the carousel and counters for a while and print what happens
    Preview {
        /// How long to run, in milliseconds
        #[arg(long, default_value = "13000")]
        millis: u64,
    },
}

#[derive(Subcommand)]
pub enum AssetAction {
    /// List assets, newest first
    List {
        /// Case-insensitive search across names and tags
        #[arg(long, default_value = "")]
        query: String,

        /// Print the matching assets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log a new asset
    Add {
        #[arg(long)]
        name: String,

        /// design, video, audio, document, model, code or dataset
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,

        #[arg(long)]
        link: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Remove the asset at a position of the (optionally filtered) list
    Remove {
        position: usize,

        #[arg(long, default_value = "")]
        query: String,
    },
    /// Write every asset to neon-nexus-assets.json
    Export {
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
}
