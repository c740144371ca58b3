//! Edit command handler.
//!
//! Sends a partial update with only the supplied fields. The supplied
//! values are checked against the form rules first.

use hotel_admin_core::{HotelSchema, HotelUpdate};
use hotel_admin_gui::GuiError;

use crate::bootstrap::CliContext;
use crate::commands::EditArgs;
use crate::error::CliError;
use crate::presentation::hotel_summary;

impl EditArgs {
    /// Split into the hotel id and the supplied changes.
    pub fn into_parts(self) -> (String, HotelUpdate) {
        let changes = HotelUpdate {
            name: self.name,
            description: self.description,
            location: self.location,
            address: self.address,
            rating: self.rating,
            photos: None,
            price_per_night: self.price,
        };
        (self.id, changes)
    }
}

/// Execute the edit command.
pub async fn execute(ctx: &CliContext, args: EditArgs) -> Result<String, CliError> {
    let (id, changes) = args.into_parts();
    if id.trim().is_empty() {
        return Err(CliError::Arguments("hotel id must not be empty".to_string()));
    }
    if changes.is_empty() {
        return Err(CliError::Arguments(
            "nothing to update: pass at least one field".to_string(),
        ));
    }
    HotelSchema::FORM.validate_update(&changes)?;

    let hotel = ctx
        .store()
        .api()
        .update_hotel(&id, &changes)
        .await
        .map_err(|e| CliError::from(GuiError::from(e)))?;

    tracing::info!(target: "hotel_admin.cli", hotel_id = %hotel.id, "hotel updated");
    Ok(hotel_summary(&hotel, Some("Hotel updated:")))
}
