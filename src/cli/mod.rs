//! CLI module for the News Gateway
//!
//! Provides the `serve` subcommand that runs the HTTP gateway.

pub mod serve;

use clap::{Parser, Subcommand};

/// News Gateway - Caching reverse proxy for a news headlines provider
#[derive(Parser)]
#[command(name = "news-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway server
    Serve,
}
