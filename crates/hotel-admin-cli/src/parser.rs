//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use hotel_admin_gui::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for the hotel administration panel.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "hotel-admin")]
#[command(about = "Browse and manage the hotel catalogue")]
#[command(version)]
pub struct Cli {
    /// Base URL of a running hotel-admin server
    #[arg(long, global = true, env = "HOTEL_ADMIN_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Bearer token: required by `serve`, sent by the client commands
    #[arg(long, global = true, env = "HOTEL_ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
