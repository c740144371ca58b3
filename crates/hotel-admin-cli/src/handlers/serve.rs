//! Serve command handler.
//!
//! Starts the HTTP server in the foreground.

use hotel_admin_axum::{ServerConfig, start_server};

use crate::commands::ServeArgs;
use crate::error::CliError;

/// Build the server configuration from the arguments and the global token.
pub fn server_config(args: ServeArgs, token: Option<String>) -> ServerConfig {
    let mut config = ServerConfig::with_defaults().with_port(args.port);
    if let Some(path) = args.database {
        config = config.with_database_path(path);
    }
    if let Some(dir) = args.static_dir {
        config = config.with_static_dir(dir);
    }
    if !args.allow_origins.is_empty() {
        config = config.with_allowed_origins(args.allow_origins);
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        config = config.with_api_token(token);
    }
    config
}

/// Execute the serve command. Runs until the server stops.
pub async fn execute(args: ServeArgs, token: Option<String>) -> Result<(), CliError> {
    let config = server_config(args, token);

    println!();
    println!("  hotel-admin server starting...");
    println!();
    println!("  API:     http://localhost:{}/api/hotels", config.port);
    if let Some(dir) = &config.static_dir {
        println!("  UI from: {}", dir.display());
    }
    if config.api_token.is_some() {
        println!("  Auth:    bearer token required");
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config)
        .await
        .map_err(|e| CliError::Server(format!("{e:#}")))
}
