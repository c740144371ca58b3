//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use hotel_admin_axum::DEFAULT_PORT;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Show one page of hotels
    List(ListArgs),

    /// Create a hotel
    Add(AddArgs),

    /// Change fields of an existing hotel
    Edit(EditArgs),

    /// Show resolved data paths
    Paths,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "HOTEL_ADMIN_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database file (defaults to the data directory)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Directory with a built front-end to serve
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin; repeat for several (default: any)
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name fragment
    #[arg(short, long)]
    pub name: Option<String>,

    /// Minimum rating
    #[arg(short, long)]
    pub rating: Option<f64>,

    /// Minimum price per night
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum price per night
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub address: String,

    /// Price per night
    #[arg(long)]
    pub price: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Rating between 0 and 5
    #[arg(long)]
    pub rating: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the hotel to change
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Price per night
    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub description: Option<String>,

    /// Rating between 0 and 5
    #[arg(long)]
    pub rating: Option<f64>,
}
