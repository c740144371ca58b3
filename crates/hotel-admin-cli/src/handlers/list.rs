//! List command handler.
//!
//! Fetches one page through the list view and renders it as a table.

use hotel_admin_gui::{FetchOutcome, HotelFilters, HotelTable};

use crate::bootstrap::CliContext;
use crate::commands::ListArgs;
use crate::error::CliError;
use crate::presentation::render_hotel_table;

impl From<ListArgs> for HotelFilters {
    fn from(args: ListArgs) -> Self {
        Self {
            name: args.name,
            rating: args.rating,
            price_min: args.price_min,
            price_max: args.price_max,
            page: Some(args.page),
        }
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, args: ListArgs) -> Result<String, CliError> {
    let table = HotelTable::new(ctx.store().clone()).with_filters(args.into());

    match table.load().await {
        FetchOutcome::Applied | FetchOutcome::Superseded => Ok(render_hotel_table(&table)),
        FetchOutcome::Failed(message) => Err(CliError::Api(message)),
    }
}
