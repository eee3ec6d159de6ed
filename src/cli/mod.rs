//! Command-line interface for dram.

mod commands;

use clap::{Parser, Subcommand};

/// dram - a whiskey tasting journal server
#[derive(Parser)]
#[command(name = "dram")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the journal API (default)
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Provision a journal account and print its API token
    CreateUser {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        /// Allow managing whiskey types
        #[arg(long)]
        admin: bool,
    },
}

pub use commands::*;
