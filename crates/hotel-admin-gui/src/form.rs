//! Create and edit forms.
//!
//! A form holds raw text inputs. Numeric inputs are coerced on validation:
//! blank becomes 0 and anything unparsable is a field error. Validation uses
//! [`HotelSchema::FORM`] and always runs before a request is made.

use std::sync::Arc;

use hotel_admin_core::{Hotel, HotelField, HotelSchema, HotelUpdate, NewHotel, ValidationErrors};

use crate::store::{HotelFilters, HotelStore};

/// Whether the form creates a hotel or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Raw form inputs, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelFormValues {
    pub name: String,
    pub description: String,
    pub location: String,
    pub address: String,
    pub rating: String,
    pub price_per_night: String,
}

impl Default for HotelFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            address: String::new(),
            rating: "0".to_string(),
            price_per_night: "0".to_string(),
        }
    }
}

impl HotelFormValues {
    /// Pre-populate the inputs from an existing record.
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone().unwrap_or_default(),
            location: hotel.location.clone(),
            address: hotel.address.clone(),
            rating: hotel.rating.to_string(),
            price_per_night: hotel.price_per_night.to_string(),
        }
    }

    fn field_mut(&mut self, field: HotelField) -> &mut String {
        match field {
            HotelField::Name => &mut self.name,
            HotelField::Description => &mut self.description,
            HotelField::Location => &mut self.location,
            HotelField::Address => &mut self.address,
            HotelField::Rating => &mut self.rating,
            HotelField::PricePerNight => &mut self.price_per_night,
        }
    }

    /// The coerced payload. Unparsable numbers become NaN, which the schema rejects.
    fn to_new_hotel(&self) -> NewHotel {
        let description = self.description.trim();
        let mut hotel = NewHotel::new(
            self.name.trim(),
            self.location.trim(),
            self.address.trim(),
            coerce_number(&self.price_per_night),
        )
        .with_rating(coerce_number(&self.rating));
        if !description.is_empty() {
            hotel = hotel.with_description(description);
        }
        hotel
    }
}

fn coerce_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}

/// Result of [`HotelForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The hotel was created; the form has been reset.
    Created(Hotel),
    /// The hotel was updated; the host should close the dialog and refresh.
    Updated(Hotel),
    /// The server rejected the request; inputs are kept.
    Failed(String),
}

/// A create or edit form bound to a store.
pub struct HotelForm {
    mode: FormMode,
    store: Arc<HotelStore>,
    values: HotelFormValues,
    errors: ValidationErrors,
    submit_error: Option<String>,
}

impl HotelForm {
    /// An empty create form.
    pub fn create(store: Arc<HotelStore>) -> Self {
        Self::with_values(FormMode::Create, store, HotelFormValues::default())
    }

    /// An edit form pre-populated from `hotel`.
    pub fn edit(store: Arc<HotelStore>, hotel: &Hotel) -> Self {
        Self::with_values(
            FormMode::Edit {
                id: hotel.id.clone(),
            },
            store,
            HotelFormValues::from_hotel(hotel),
        )
    }

    fn with_values(mode: FormMode, store: Arc<HotelStore>, values: HotelFormValues) -> Self {
        Self {
            mode,
            store,
            values,
            errors: ValidationErrors::new(),
            submit_error: None,
        }
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub const fn values(&self) -> &HotelFormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut HotelFormValues {
        &mut self.values
    }

    /// Set one raw input.
    pub fn set(&mut self, field: HotelField, value: impl Into<String>) {
        *self.values.field_mut(field) = value.into();
    }

    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: HotelField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Message of the last rejected submission.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate the current inputs, recording field errors. Returns true if valid.
    pub fn validate(&mut self) -> bool {
        match HotelSchema::FORM.validate_new(&self.values.to_new_hotel()) {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Validate and, if valid, send the create or update request.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }
        self.submit_error = None;
        let payload = self.values.to_new_hotel();

        match &self.mode {
            FormMode::Create => match self.store.api().create_hotel(&payload).await {
                Ok(hotel) => {
                    tracing::info!(target: "hotel_admin.form", hotel_id = %hotel.id, "hotel created");
                    self.values = HotelFormValues::default();
                    self.store.fetch_hotels(HotelFilters::default()).await;
                    SubmitOutcome::Created(hotel)
                }
                Err(err) => self.fail(format!("Failed to add hotel: {err}")),
            },
            FormMode::Edit { id } => {
                // Every field is sent; an empty description clears the stored one.
                let changes = HotelUpdate {
                    name: Some(payload.name),
                    description: Some(self.values.description.trim().to_string()),
                    location: Some(payload.location),
                    address: Some(payload.address),
                    rating: Some(payload.rating),
                    photos: None,
                    price_per_night: Some(payload.price_per_night),
                };
                match self.store.api().update_hotel(id, &changes).await {
                    Ok(hotel) => {
                        tracing::info!(target: "hotel_admin.form", hotel_id = %hotel.id, "hotel updated");
                        SubmitOutcome::Updated(hotel)
                    }
                    Err(err) => self.fail(format!("Failed to update hotel: {err}")),
                }
            }
        }
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        tracing::warn!(target: "hotel_admin.form", error = %message, "submission rejected");
        self.submit_error = Some(message.clone());
        SubmitOutcome::Failed(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::fake::{FakeHotelApi, hotel};

    fn setup(hotels: Vec<Hotel>) -> (Arc<FakeHotelApi>, Arc<HotelStore>) {
        let api = Arc::new(FakeHotelApi::with_hotels(hotels));
        let store = Arc::new(HotelStore::new(api.clone()));
        (api, store)
    }

    fn fill_valid(form: &mut HotelForm) {
        form.set(HotelField::Name, "Seaside Inn");
        form.set(HotelField::Location, "Porto");
        form.set(HotelField::Address, "Avenida 12");
        form.set(HotelField::PricePerNight, "150");
    }

    #[test]
    fn test_coerce_number() {
        assert!((coerce_number("") - 0.0).abs() < f64::EPSILON);
        assert!((coerce_number(" 4.5 ") - 4.5).abs() < f64::EPSILON);
        assert!(coerce_number("abc").is_nan());
    }

    #[tokio::test]
    async fn test_invalid_input_blocks_submission() {
        let (api, store) = setup(Vec::new());
        let mut form = HotelForm::create(store);
        form.set(HotelField::Name, "A");
        form.set(HotelField::Address, "123");
        form.set(HotelField::Rating, "7");
        form.set(HotelField::PricePerNight, "cheap");

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.len() == 5));
        assert_eq!(
            form.field_error(HotelField::Name),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(
            form.field_error(HotelField::Location),
            Some("Location is required.")
        );
        assert_eq!(
            form.field_error(HotelField::Address),
            Some("Address is required and must be at least 5 characters.")
        );
        assert_eq!(
            form.field_error(HotelField::Rating),
            Some("Rating must be between 0 and 5.")
        );
        assert_eq!(
            form.field_error(HotelField::PricePerNight),
            Some("Price must be a positive number.")
        );
        assert!(api.created.lock().unwrap().is_empty());
        assert_eq!(api.list_call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_numbers_coerce_to_zero() {
        let (api, store) = setup(Vec::new());
        let mut form = HotelForm::create(store);
        fill_valid(&mut form);
        form.set(HotelField::Rating, "");
        form.set(HotelField::PricePerNight, " ");

        let outcome = form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        let sent = api.created.lock().unwrap()[0].clone();
        assert!(sent.rating.abs() < f64::EPSILON);
        assert!(sent.price_per_night.abs() < f64::EPSILON);
        assert!(sent.description.is_none());
    }

    #[tokio::test]
    async fn test_create_success_resets_and_refreshes() {
        let (api, store) = setup(Vec::new());
        let mut form = HotelForm::create(store.clone());
        fill_valid(&mut form);
        form.set(HotelField::Description, "Ocean view");

        let outcome = form.submit().await;

        let SubmitOutcome::Created(created) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert_eq!(created.description.as_deref(), Some("Ocean view"));
        assert_eq!(form.values(), &HotelFormValues::default());
        assert_eq!(api.list_call_count(), 1);
        assert_eq!(api.last_list_call().unwrap().page, 1);
        assert_eq!(store.snapshot().total_count, 1);
    }

    #[tokio::test]
    async fn test_create_failure_preserves_inputs() {
        let (api, store) = setup(Vec::new());
        let mut form = HotelForm::create(store);
        fill_valid(&mut form);
        let entered = form.values().clone();
        api.fail_next(ApiError::Status {
            status: 500,
            message: "Something went wrong while creating the hotel!".to_string(),
        });

        let outcome = form.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(
                "Failed to add hotel: Something went wrong while creating the hotel!".to_string()
            )
        );
        assert_eq!(form.values(), &entered);
        assert!(form.submit_error().unwrap().starts_with("Failed to add hotel"));
        assert_eq!(api.list_call_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_prepopulates_and_updates() {
        let existing = hotel("h1", "Old Name", 3.5, 99.5);
        let (api, store) = setup(vec![existing.clone()]);
        let mut form = HotelForm::edit(store, &existing);

        assert_eq!(form.mode(), &FormMode::Edit { id: "h1".to_string() });
        assert_eq!(form.values().name, "Old Name");
        assert_eq!(form.values().rating, "3.5");
        assert_eq!(form.values().price_per_night, "99.5");

        form.set(HotelField::Name, "New Name");
        let outcome = form.submit().await;

        let SubmitOutcome::Updated(updated) = outcome else {
            panic!("expected Updated, got {outcome:?}");
        };
        assert_eq!(updated.name, "New Name");
        assert!((updated.price_per_night - 99.5).abs() < f64::EPSILON);
        let (id, changes) = api.updated.lock().unwrap()[0].clone();
        assert_eq!(id, "h1");
        assert!(changes.photos.is_none());
        // The host owns the refresh after an edit.
        assert_eq!(api.list_call_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_clearing_description_sends_empty_text() {
        let mut existing = hotel("h1", "Riverside", 4.0, 120.0);
        existing.description = Some("river view".to_string());
        let (api, store) = setup(vec![existing.clone()]);
        let mut form = HotelForm::edit(store, &existing);
        assert_eq!(form.values().description, "river view");

        form.set(HotelField::Description, "");
        let outcome = form.submit().await;

        let SubmitOutcome::Updated(updated) = outcome else {
            panic!("expected Updated, got {outcome:?}");
        };
        let (_, changes) = api.updated.lock().unwrap()[0].clone();
        assert_eq!(changes.description.as_deref(), Some(""));
        assert!(updated.description.is_none());
    }

    #[tokio::test]
    async fn test_edit_failure_reports_server_message() {
        let existing = hotel("h1", "Old Name", 3.5, 99.5);
        let (api, store) = setup(vec![existing.clone()]);
        let mut form = HotelForm::edit(store, &existing);
        api.fail_next(ApiError::Status {
            status: 400,
            message: "Hotel 'id' is required.".to_string(),
        });

        let outcome = form.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Failed to update hotel: Hotel 'id' is required.".to_string())
        );
        assert_eq!(form.values().name, "Old Name");
    }
}
