//! CLI entry point.

use clap::{CommandFactory, Parser};

use hotel_admin_cli::{Cli, init_tracing, run};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        let _ = Cli::command().print_help();
        return;
    };

    match run(command, cli.url, cli.token).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
