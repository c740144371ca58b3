//! Command-line front-end for hotel-admin.
//!
//! `serve` runs the HTTP server in-process. The other data commands talk
//! to a running server through the client crate's store, list view and
//! forms, so they behave exactly like any other front-end.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

// Silence unused dev-dependency warnings for integration-test infrastructure
#[cfg(test)]
use hotel_admin_db as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

use tracing_subscriber::EnvFilter;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `info`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run one command and return the text to print.
pub async fn run(command: Commands, url: String, token: Option<String>) -> Result<String, CliError> {
    let output = match command {
        Commands::Serve(args) => {
            handlers::serve::execute(args, token).await?;
            String::new()
        }
        Commands::Paths => handlers::paths::execute()?,
        Commands::List(args) => {
            let ctx = bootstrap(&CliConfig::new(url, token))?;
            handlers::list::execute(&ctx, args).await?
        }
        Commands::Add(args) => {
            let ctx = bootstrap(&CliConfig::new(url, token))?;
            handlers::add::execute(&ctx, args).await?
        }
        Commands::Edit(args) => {
            let ctx = bootstrap(&CliConfig::new(url, token))?;
            handlers::edit::execute(&ctx, args).await?
        }
    };
    Ok(output)
}
