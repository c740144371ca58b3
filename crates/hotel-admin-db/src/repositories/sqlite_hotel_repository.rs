//! `SQLite` implementation of the `HotelRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use hotel_admin_core::{
    Hotel, HotelFilter, HotelListQuery, HotelRepository, HotelUpdate, NewHotel, RepositoryError,
};

use super::row_mappers::{
    HOTEL_SELECT_COLUMNS, escape_like, photos_to_json, row_to_hotel, row_to_room, storage_error,
};

/// `SQLite` implementation of the `HotelRepository` trait.
///
/// Filters are always bound as parameters. `SQLite`'s `LOWER` folds ASCII
/// only, so names are folded in Rust and kept in `name_lower`. `find_page` and `count` share
/// `push_filter`, so both see the same predicate.
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    /// Create a new `SQLite` hotel repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load rooms for `hotels` in one query and attach them in place.
    async fn attach_rooms(&self, hotels: &mut [Hotel]) -> Result<(), RepositoryError> {
        if hotels.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT id, hotel_id, name FROM rooms WHERE hotel_id IN (");
        let mut ids = builder.separated(", ");
        for hotel in hotels.iter() {
            ids.push_bind(hotel.id.clone());
        }
        ids.push_unseparated(") ORDER BY rowid ASC");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        let mut by_hotel: HashMap<String, Vec<_>> = HashMap::new();
        for row in &rows {
            let (hotel_id, room) = row_to_room(row)?;
            by_hotel.entry(hotel_id).or_default().push(room);
        }
        for hotel in hotels.iter_mut() {
            if let Some(rooms) = by_hotel.remove(&hotel.id) {
                hotel.rooms = rooms;
            }
        }
        Ok(())
    }
}

/// Append the conjunctive `WHERE` clause for `filter`, if any.
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &HotelFilter) {
    let mut keyword = " WHERE ";

    if let Some(fragment) = filter.name_folded() {
        builder
            .push(keyword)
            .push("name_lower LIKE '%' || ")
            .push_bind(escape_like(&fragment))
            .push(" || '%' ESCAPE '\\'");
        keyword = " AND ";
    }

    if let Some(min_rating) = filter.rating {
        builder.push(keyword).push("rating >= ").push_bind(min_rating);
        keyword = " AND ";
    }

    // Price bounds form one range predicate
    match (filter.price_min, filter.price_max) {
        (Some(min), Some(max)) => {
            builder
                .push(keyword)
                .push("price_per_night BETWEEN ")
                .push_bind(min)
                .push(" AND ")
                .push_bind(max);
        }
        (Some(min), None) => {
            builder.push(keyword).push("price_per_night >= ").push_bind(min);
        }
        (None, Some(max)) => {
            builder.push(keyword).push("price_per_night <= ").push_bind(max);
        }
        (None, None) => {}
    }
}

/// An empty description is stored as NULL.
fn stored_description(description: Option<&str>) -> Option<&str> {
    description.filter(|d| !d.is_empty())
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn find_page(&self, query: &HotelListQuery) -> Result<Vec<Hotel>, RepositoryError> {
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels"));
        push_filter(&mut builder, &query.filter);
        builder
            .push(" ORDER BY created_at ASC, rowid ASC LIMIT ")
            .push_bind(i64::from(query.limit()))
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        let mut hotels = rows
            .iter()
            .map(row_to_hotel)
            .collect::<Result<Vec<_>, _>>()?;
        self.attach_rooms(&mut hotels).await?;
        Ok(hotels)
    }

    async fn count(&self, filter: &HotelFilter) -> Result<u64, RepositoryError> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM hotels");
        push_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        u64::try_from(total).map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Hotel, RepositoryError> {
        let query = format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {id}")))?;

        let mut hotel = row_to_hotel(&row)?;
        self.attach_rooms(std::slice::from_mut(&mut hotel)).await?;
        Ok(hotel)
    }

    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let photos_json = photos_to_json(&hotel.photos)?;
        let description = stored_description(hotel.description.as_deref());

        sqlx::query(
            r"INSERT INTO hotels (
                id, name, name_lower, description, location, address, rating, photos,
                price_per_night, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&hotel.name)
        .bind(hotel.name.to_lowercase())
        .bind(description)
        .bind(&hotel.location)
        .bind(&hotel.address)
        .bind(hotel.rating)
        .bind(&photos_json)
        .bind(hotel.price_per_night)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(format!("Hotel with ID {id}"))
            }
            other => storage_error(other),
        })?;

        tracing::debug!(target: "hotel_admin.db", hotel_id = %id, "inserted hotel");

        Ok(Hotel {
            id,
            name: hotel.name.clone(),
            description: description.map(str::to_string),
            location: hotel.location.clone(),
            address: hotel.address.clone(),
            rating: hotel.rating,
            photos: hotel.photos.clone(),
            price_per_night: hotel.price_per_night,
            rooms: Vec::new(),
        })
    }

    async fn update(&self, id: &str, changes: &HotelUpdate) -> Result<Hotel, RepositoryError> {
        let photos_json = changes
            .photos
            .as_deref()
            .map(photos_to_json)
            .transpose()?;

        let result = sqlx::query(
            r"UPDATE hotels SET
                name = COALESCE(?, name),
                name_lower = COALESCE(?, name_lower),
                description = CASE WHEN ? IS NULL THEN description ELSE NULLIF(?, '') END,
                location = COALESCE(?, location),
                address = COALESCE(?, address),
                rating = COALESCE(?, rating),
                photos = COALESCE(?, photos),
                price_per_night = COALESCE(?, price_per_night)
            WHERE id = ?",
        )
        .bind(&changes.name)
        .bind(changes.name.as_deref().map(str::to_lowercase))
        .bind(&changes.description)
        .bind(&changes.description)
        .bind(&changes.location)
        .bind(&changes.address)
        .bind(changes.rating)
        .bind(&photos_json)
        .bind(changes.price_per_night)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Hotel with ID {id}")));
        }

        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;

    async fn seed(repo: &SqliteHotelRepository, name: &str, rating: f64, price: f64) -> Hotel {
        repo.insert(
            &NewHotel::new(name, "Lisbon", "Rua Augusta 100", price).with_rating(rating),
        )
        .await
        .unwrap()
    }

    fn query(filter: HotelFilter, page: u32) -> HotelListQuery {
        HotelListQuery::new(filter, page)
    }

    #[tokio::test]
    async fn test_filtered_pages_and_count() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();

        for i in 0..25 {
            seed(&repo, &format!("Match {i:02}"), 4.5, 150.0).await;
        }
        seed(&repo, "Too cheap", 4.5, 99.0).await;
        seed(&repo, "Too pricey", 4.5, 201.0).await;
        seed(&repo, "Low rated", 3.9, 150.0).await;

        let filter = HotelFilter {
            rating: Some(4.0),
            price_min: Some(100.0),
            price_max: Some(200.0),
            ..HotelFilter::default()
        };

        let sizes: Vec<usize> = {
            let mut sizes = Vec::new();
            for page in 1..=4 {
                sizes.push(repo.find_page(&query(filter.clone(), page)).await.unwrap().len());
            }
            sizes
        };
        assert_eq!(sizes, vec![10, 10, 5, 0]);
        assert_eq!(repo.count(&filter).await.unwrap(), 25);
        assert_eq!(repo.count(&HotelFilter::default()).await.unwrap(), 28);
    }

    #[tokio::test]
    async fn test_pages_follow_insertion_order() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        for i in 0..12 {
            seed(&repo, &format!("Hotel {i:02}"), 0.0, 10.0).await;
        }

        let second = repo
            .find_page(&query(HotelFilter::default(), 2))
            .await
            .unwrap();
        let names: Vec<&str> = second.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Hotel 10", "Hotel 11"]);
    }

    #[tokio::test]
    async fn test_name_filter_is_case_insensitive_and_literal() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        seed(&repo, "The Grand Budapest", 5.0, 300.0).await;
        seed(&repo, "100% Comfort", 3.0, 80.0).await;
        seed(&repo, "Seaside Inn", 4.0, 120.0).await;

        let grand = HotelFilter {
            name: Some("grand".to_string()),
            ..HotelFilter::default()
        };
        let hits = repo.find_page(&query(grand.clone(), 1)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Grand Budapest");
        assert_eq!(repo.count(&grand).await.unwrap(), 1);

        let percent = HotelFilter {
            name: Some("0%".to_string()),
            ..HotelFilter::default()
        };
        let hits = repo.find_page(&query(percent, 1)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Comfort");

        let underscore = HotelFilter {
            name: Some("_".to_string()),
            ..HotelFilter::default()
        };
        assert_eq!(repo.count(&underscore).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_applies_defaults_and_assigns_id() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();

        let created = repo
            .insert(&NewHotel::new("A", "B", "12345", 50.0))
            .await
            .unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());

        let stored = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(stored, created);
        assert!(stored.rating.abs() < f64::EPSILON);
        assert!(stored.photos.is_empty());
        assert!(stored.description.is_none());
    }

    #[tokio::test]
    async fn test_update_leaves_absent_fields_and_is_idempotent() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        let created = repo
            .insert(
                &NewHotel::new("Old Name", "Porto", "Rua das Flores 5", 90.0)
                    .with_description("river view")
                    .with_photos(vec!["one.jpg".to_string()]),
            )
            .await
            .unwrap();

        let changes = HotelUpdate {
            name: Some("New Name".to_string()),
            price_per_night: Some(110.0),
            ..HotelUpdate::default()
        };
        let first = repo.update(&created.id, &changes).await.unwrap();
        let second = repo.update(&created.id, &changes).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "New Name");
        assert!((first.price_per_night - 110.0).abs() < f64::EPSILON);
        assert_eq!(first.description.as_deref(), Some("river view"));
        assert_eq!(first.photos, vec!["one.jpg".to_string()]);
        assert_eq!(first.location, "Porto");
    }

    #[tokio::test]
    async fn test_name_filter_folds_non_ascii() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        let eden = seed(&repo, "ÉDEN Palace", 4.0, 120.0).await;
        seed(&repo, "Eden Lodge", 4.0, 120.0).await;

        let filter = HotelFilter {
            name: Some("éden".to_string()),
            ..HotelFilter::default()
        };
        let hits = repo.find_page(&query(filter.clone(), 1)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, eden.id);
        assert_eq!(repo.count(&filter).await.unwrap(), 1);
        assert!(filter.matches(&hits[0]));

        // Renaming refreshes the folded copy.
        let rename = HotelUpdate {
            name: Some("Ölberg Haus".to_string()),
            ..HotelUpdate::default()
        };
        repo.update(&eden.id, &rename).await.unwrap();
        assert_eq!(repo.count(&filter).await.unwrap(), 0);
        let olberg = HotelFilter {
            name: Some("ÖLBERG".to_string()),
            ..HotelFilter::default()
        };
        assert_eq!(repo.count(&olberg).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_description_clears_stored_text() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        let created = repo
            .insert(
                &NewHotel::new("Riverside", "Porto", "Rua das Flores 5", 90.0)
                    .with_description("river view"),
            )
            .await
            .unwrap();

        let cleared = repo
            .update(
                &created.id,
                &HotelUpdate {
                    description: Some(String::new()),
                    ..HotelUpdate::default()
                },
            )
            .await
            .unwrap();
        assert!(cleared.description.is_none());

        let blank = repo
            .insert(&NewHotel::new("Blank", "Porto", "Rua das Flores 6", 90.0).with_description(""))
            .await
            .unwrap();
        assert!(blank.description.is_none());
        assert!(repo.get_by_id(&blank.id).await.unwrap().description.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();

        let err = repo
            .update("missing", &HotelUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rooms_are_attached_per_hotel() {
        let db = TestDb::new().await.unwrap();
        let repo = db.hotel_repository();
        let first = seed(&repo, "First", 4.0, 100.0).await;
        let second = seed(&repo, "Second", 4.0, 100.0).await;

        db.insert_room(&first.id, "Deluxe").await.unwrap();
        db.insert_room(&first.id, "Standard").await.unwrap();
        db.insert_room(&second.id, "Suite").await.unwrap();

        let page = repo
            .find_page(&query(HotelFilter::default(), 1))
            .await
            .unwrap();
        let rooms: Vec<Vec<&str>> = page
            .iter()
            .map(|h| h.rooms.iter().map(|r| r.name.as_str()).collect())
            .collect();
        assert_eq!(rooms, vec![vec!["Deluxe", "Standard"], vec!["Suite"]]);

        let fetched = repo.get_by_id(&second.id).await.unwrap();
        assert_eq!(fetched.rooms.len(), 1);
    }
}
