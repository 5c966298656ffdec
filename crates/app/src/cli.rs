//! Command line arguments

use clap::{Parser, Subcommand};

/// Relay workbench client.
#[derive(Debug, Parser)]
#[command(name = "relay")]
#[command(about = "Browse and run API request collections served by a Relay server")]
#[command(version)]
pub struct Cli {
    /// Server URL, overriding the settings file and `RELAY_SERVER_URL`.
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the collection list fragment.
    Collections,
    /// Run every request of a collection and stream the results.
    Run {
        /// Collection path.
        collection: String,
    },
    /// Print the effective settings and where they are stored.
    Settings,
}
