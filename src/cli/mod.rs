//! CLI module for the token service

pub mod serve;

use clap::{Parser, Subcommand};

/// tokenseal - sealed identity tokens without server-side sessions
#[derive(Parser)]
#[command(name = "tokenseal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
