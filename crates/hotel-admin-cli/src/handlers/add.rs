//! Add command handler.
//!
//! Fills a create form from the arguments and submits it, so the same
//! field rules apply as in any other front-end.

use hotel_admin_gui::{HotelField, HotelForm, SubmitOutcome};

use crate::bootstrap::CliContext;
use crate::commands::AddArgs;
use crate::error::CliError;
use crate::presentation::hotel_summary;

/// Execute the add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<String, CliError> {
    let mut form = HotelForm::create(ctx.store().clone());
    form.set(HotelField::Name, args.name);
    form.set(HotelField::Location, args.location);
    form.set(HotelField::Address, args.address);
    form.set(HotelField::PricePerNight, args.price);
    if let Some(description) = args.description {
        form.set(HotelField::Description, description);
    }
    if let Some(rating) = args.rating {
        form.set(HotelField::Rating, rating);
    }

    match form.submit().await {
        SubmitOutcome::Created(hotel) | SubmitOutcome::Updated(hotel) => {
            Ok(hotel_summary(&hotel, Some("Hotel created:")))
        }
        SubmitOutcome::Invalid(errors) => Err(errors.into()),
        SubmitOutcome::Failed(message) => Err(CliError::Api(message)),
    }
}
