//! The hotel validation schema.
//!
//! A single definition of the field rules, with two profiles:
//!
//! - [`HotelSchema::FORM`] is applied by the create/edit forms before any
//!   request is sent.
//! - [`HotelSchema::RECORD`] is applied by the service layer to every
//!   create and update that reaches the server.
//!
//! Both profiles share the numeric rules (rating in `[0, 5]`, price `>= 0`,
//! finite values only); they differ in the minimum lengths of text fields.

use std::fmt;

use thiserror::Error;

use crate::domain::{HotelUpdate, NewHotel};

/// Hotel fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelField {
    Name,
    Description,
    Location,
    Address,
    Rating,
    PricePerNight,
}

impl HotelField {
    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Location => "location",
            Self::Address => "address",
            Self::Rating => "rating",
            Self::PricePerNight => "pricePerNight",
        }
    }
}

impl fmt::Display for HotelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-scoped validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: HotelField,
    pub message: String,
}

/// All field errors from one validation pass, in field order.
///
/// Displays as the messages joined by a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: HotelField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: HotelField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimum length and message for one text field.
#[derive(Debug, Clone, Copy)]
struct TextRule {
    min_chars: usize,
    message: &'static str,
}

impl TextRule {
    fn check(self, value: &str) -> Option<&'static str> {
        (value.trim().chars().count() < self.min_chars).then_some(self.message)
    }
}

/// A validation profile over the hotel fields.
#[derive(Debug, Clone, Copy)]
pub struct HotelSchema {
    name: TextRule,
    location: TextRule,
    address: TextRule,
}

pub const MAX_RATING: f64 = 5.0;
const RATING_MESSAGE: &str = "Rating must be between 0 and 5.";
const PRICE_MESSAGE: &str = "Price must be a positive number.";

impl HotelSchema {
    /// Rules shown to the user by the create/edit forms.
    pub const FORM: Self = Self {
        name: TextRule {
            min_chars: 2,
            message: "Name must be at least 2 characters.",
        },
        location: TextRule {
            min_chars: 2,
            message: "Location is required.",
        },
        address: TextRule {
            min_chars: 5,
            message: "Address is required and must be at least 5 characters.",
        },
    };

    /// Rules enforced on every persisted record.
    pub const RECORD: Self = Self {
        name: TextRule {
            min_chars: 1,
            message: "Name is required.",
        },
        location: TextRule {
            min_chars: 1,
            message: "Location is required.",
        },
        address: TextRule {
            min_chars: 5,
            message: "Address is required and must be at least 5 characters.",
        },
    };

    pub fn check_name(&self, value: &str) -> Option<&'static str> {
        self.name.check(value)
    }

    pub fn check_location(&self, value: &str) -> Option<&'static str> {
        self.location.check(value)
    }

    pub fn check_address(&self, value: &str) -> Option<&'static str> {
        self.address.check(value)
    }

    pub fn check_rating(&self, value: f64) -> Option<&'static str> {
        (!value.is_finite() || !(0.0..=MAX_RATING).contains(&value)).then_some(RATING_MESSAGE)
    }

    pub fn check_price(&self, value: f64) -> Option<&'static str> {
        (!value.is_finite() || value < 0.0).then_some(PRICE_MESSAGE)
    }

    /// Validate a complete hotel before insertion.
    pub fn validate_new(&self, hotel: &NewHotel) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let checks = [
            (HotelField::Name, self.check_name(&hotel.name)),
            (HotelField::Location, self.check_location(&hotel.location)),
            (HotelField::Address, self.check_address(&hotel.address)),
            (HotelField::Rating, self.check_rating(hotel.rating)),
            (
                HotelField::PricePerNight,
                self.check_price(hotel.price_per_night),
            ),
        ];
        for (field, message) in checks {
            if let Some(message) = message {
                errors.push(field, message);
            }
        }
        errors.into_result()
    }

    /// Validate only the fields present in a partial update.
    pub fn validate_update(&self, changes: &HotelUpdate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let checks = [
            (
                HotelField::Name,
                changes.name.as_deref().and_then(|v| self.check_name(v)),
            ),
            (
                HotelField::Location,
                changes
                    .location
                    .as_deref()
                    .and_then(|v| self.check_location(v)),
            ),
            (
                HotelField::Address,
                changes
                    .address
                    .as_deref()
                    .and_then(|v| self.check_address(v)),
            ),
            (
                HotelField::Rating,
                changes.rating.and_then(|v| self.check_rating(v)),
            ),
            (
                HotelField::PricePerNight,
                changes.price_per_night.and_then(|v| self.check_price(v)),
            ),
        ];
        for (field, message) in checks {
            if let Some(message) = message {
                errors.push(field, message);
            }
        }
        errors.into_result()
    }
}
