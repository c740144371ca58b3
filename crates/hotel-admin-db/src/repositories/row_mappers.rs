//! Row mapping helpers for `SQLite` queries.

use hotel_admin_core::{Hotel, RepositoryError, Room};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for hotel queries.
pub const HOTEL_SELECT_COLUMNS: &str =
    "id, name, description, location, address, rating, photos, price_per_night";

pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Escape `%`, `_` and `\` so a fragment matches literally under `ESCAPE '\'`.
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Encode photo URLs as the JSON array stored in `hotels.photos`.
pub fn photos_to_json(photos: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(photos).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a database row into a Hotel (rooms are attached separately).
pub fn row_to_hotel(row: &SqliteRow) -> Result<Hotel, RepositoryError> {
    let photos_json: String = row.try_get("photos").map_err(storage_error)?;
    let photos: Vec<String> = serde_json::from_str(&photos_json)
        .map_err(|e| RepositoryError::Serialization(format!("photos: {e}")))?;

    Ok(Hotel {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        location: row.try_get("location").map_err(storage_error)?,
        address: row.try_get("address").map_err(storage_error)?,
        rating: row.try_get("rating").map_err(storage_error)?,
        photos,
        price_per_night: row.try_get("price_per_night").map_err(storage_error)?,
        rooms: Vec::new(),
    })
}

/// Parse a `rooms` row into `(hotel_id, Room)`.
pub fn row_to_room(row: &SqliteRow) -> Result<(String, Room), RepositoryError> {
    let hotel_id: String = row.try_get("hotel_id").map_err(storage_error)?;
    let room = Room {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
    };
    Ok((hotel_id, room))
}
