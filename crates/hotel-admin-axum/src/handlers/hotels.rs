//! Hotel handlers - listing, creation and update.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use hotel_admin_core::{Hotel, HotelFilter, HotelListQuery, HotelPage, HotelUpdate, NewHotel};

use crate::error::{GENERIC_FAULT, HttpError};
use crate::state::AppState;

const CREATE_FAULT: &str = "Something went wrong while creating the hotel!";
const UPDATE_FAULT: &str = "Something went wrong while updating the hotel!";

/// Raw query string of `GET /api/hotels`.
///
/// Values stay strings so that blank values can be treated as absent
/// and malformed numbers reported with the parameter name.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub name: Option<String>,
    pub rating: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    /// Convert to a list query.
    ///
    /// Empty values impose no constraint; `page` falls back to 1 when
    /// absent, not a number, or below 1.
    pub fn into_query(self) -> Result<HotelListQuery, HttpError> {
        let filter = HotelFilter {
            name: self.name.filter(|n| !n.is_empty()),
            rating: parse_bound("rating", self.rating.as_deref())?,
            price_min: parse_bound("priceMin", self.price_min.as_deref())?,
            price_max: parse_bound("priceMax", self.price_max.as_deref())?,
        };
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Ok(HotelListQuery::new(filter, page))
    }
}

fn parse_bound(param: &str, value: Option<&str>) -> Result<Option<f64>, HttpError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(HttpError::BadRequest(format!(
            "Query parameter '{param}' must be a number."
        ))),
    }
}

/// Body of `PUT /api/hotels`: the target id plus any mutable fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub price_per_night: Option<f64>,
}

impl UpdateHotelRequest {
    fn into_parts(self) -> (Option<String>, HotelUpdate) {
        let changes = HotelUpdate {
            name: self.name,
            description: self.description,
            location: self.location,
            address: self.address,
            rating: self.rating,
            photos: self.photos,
            price_per_night: self.price_per_night,
        };
        (self.id, changes)
    }
}

fn bad_body(rejection: &JsonRejection) -> HttpError {
    HttpError::BadRequest(rejection.body_text())
}

/// List one page of hotels with the total match count.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<HotelPage>, HttpError> {
    let query = params.into_query()?;
    let page = state
        .core
        .hotels()
        .list(&query)
        .await
        .map_err(|e| HttpError::from_core(e, GENERIC_FAULT))?;
    Ok(Json(page))
}

/// Create a hotel. `rating` defaults to 0 and `photos` to `[]`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewHotel>, JsonRejection>,
) -> Result<Json<Hotel>, HttpError> {
    let Json(new_hotel) = body.map_err(|e| bad_body(&e))?;
    let created = state
        .core
        .hotels()
        .create(new_hotel)
        .await
        .map_err(|e| HttpError::from_core(e, CREATE_FAULT))?;
    Ok(Json(created))
}

/// Update the fields present in the body; absent fields are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateHotelRequest>, JsonRejection>,
) -> Result<Json<Hotel>, HttpError> {
    let Json(request) = body.map_err(|e| bad_body(&e))?;
    let (id, changes) = request.into_parts();
    let updated = state
        .core
        .hotels()
        .update(id.as_deref(), changes)
        .await
        .map_err(|e| HttpError::from_core(e, UPDATE_FAULT))?;
    Ok(Json(updated))
}
