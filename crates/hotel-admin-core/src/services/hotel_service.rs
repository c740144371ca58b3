//! Hotel service - orchestrates listing, creation and updates.

use std::sync::Arc;

use crate::domain::{Hotel, HotelListQuery, HotelPage, HotelUpdate, NewHotel};
use crate::ports::{CoreError, HotelRepository};
use crate::validation::HotelSchema;

/// Message returned when an update arrives without a hotel ID.
pub const MISSING_ID_MESSAGE: &str = "Hotel 'id' is required.";

/// Service for hotel operations.
///
/// Delegates storage to the injected `HotelRepository` and applies the
/// record profile of [`HotelSchema`] to every write.
pub struct HotelService {
    repo: Arc<dyn HotelRepository>,
}

impl HotelService {
    /// Create a new hotel service with the given repository.
    pub fn new(repo: Arc<dyn HotelRepository>) -> Self {
        Self { repo }
    }

    /// One page of matching hotels plus the total match count.
    ///
    /// The count uses the same filter as the page and ignores pagination.
    pub async fn list(&self, query: &HotelListQuery) -> Result<HotelPage, CoreError> {
        let hotels = self.repo.find_page(query).await?;
        let total_count = self.repo.count(&query.filter).await?;
        tracing::debug!(
            target: "hotel_admin.service",
            page = query.page,
            returned = hotels.len(),
            total_count,
            "listed hotels"
        );
        Ok(HotelPage {
            hotels,
            total_count,
        })
    }

    /// Validate and persist a new hotel.
    pub async fn create(&self, hotel: NewHotel) -> Result<Hotel, CoreError> {
        HotelSchema::RECORD.validate_new(&hotel)?;
        let created = self.repo.insert(&hotel).await?;
        tracing::info!(target: "hotel_admin.service", hotel_id = %created.id, "hotel created");
        Ok(created)
    }

    /// Validate and apply a partial update.
    ///
    /// A missing or blank `id` is rejected before the repository is touched.
    pub async fn update(&self, id: Option<&str>, changes: HotelUpdate) -> Result<Hotel, CoreError> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CoreError::Validation(MISSING_ID_MESSAGE.to_string()))?;
        HotelSchema::RECORD.validate_update(&changes)?;
        let updated = self.repo.update(id, &changes).await?;
        tracing::info!(target: "hotel_admin.service", hotel_id = %updated.id, "hotel updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HotelFilter, Room};
    use crate::ports::{MockHotelRepository, RepositoryError};

    fn stored(id: &str, new: &NewHotel) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: new.name.clone(),
            description: new.description.clone(),
            location: new.location.clone(),
            address: new.address.clone(),
            rating: new.rating,
            photos: new.photos.clone(),
            price_per_night: new.price_per_night,
            rooms: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_combines_page_and_count() {
        let mut repo = MockHotelRepository::new();
        let hotel = Hotel {
            rooms: vec![Room {
                id: "r1".to_string(),
                name: "Suite".to_string(),
            }],
            ..stored("h1", &NewHotel::new("Grand", "Oslo", "Karl Johans gate 1", 150.0))
        };
        repo.expect_find_page()
            .withf(|q: &HotelListQuery| q.page == 3)
            .times(1)
            .returning(move |_| Ok(vec![hotel.clone()]));
        repo.expect_count()
            .withf(|f: &HotelFilter| f.rating == Some(4.0))
            .times(1)
            .returning(|_| Ok(25));

        let service = HotelService::new(Arc::new(repo));
        let filter = HotelFilter {
            rating: Some(4.0),
            ..HotelFilter::default()
        };
        let page = service
            .list(&HotelListQuery::new(filter, 3))
            .await
            .unwrap();

        assert_eq!(page.total_count, 25);
        assert_eq!(page.hotels.len(), 1);
        assert_eq!(page.hotels[0].rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_list_propagates_storage_failure() {
        let mut repo = MockHotelRepository::new();
        repo.expect_find_page()
            .returning(|_| Err(RepositoryError::Storage("disk I/O error".to_string())));
        repo.expect_count().never();

        let service = HotelService::new(Arc::new(repo));
        let err = service.list(&HotelListQuery::default()).await.unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_record_without_insert() {
        let mut repo = MockHotelRepository::new();
        repo.expect_insert().never();

        let service = HotelService::new(Arc::new(repo));
        let err = service
            .create(NewHotel::new("A", "B", "12", 50.0))
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert!(err.to_string().contains("Address is required"));
    }

    #[tokio::test]
    async fn test_create_persists_valid_record() {
        let mut repo = MockHotelRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|new| Ok(stored("generated", new)));

        let service = HotelService::new(Arc::new(repo));
        let created = service
            .create(NewHotel::new("A", "B", "12345", 50.0))
            .await
            .unwrap();

        assert_eq!(created.id, "generated");
        assert!(created.rating.abs() < f64::EPSILON);
        assert!(created.photos.is_empty());
    }

    #[tokio::test]
    async fn test_update_without_id_never_touches_repository() {
        let mut repo = MockHotelRepository::new();
        repo.expect_update().never();

        let service = HotelService::new(Arc::new(repo));
        let changes = HotelUpdate {
            name: Some("X".to_string()),
            ..HotelUpdate::default()
        };

        for id in [None, Some(""), Some("   ")] {
            let err = service.update(id, changes.clone()).await.unwrap_err();
            assert!(matches!(&err, CoreError::Validation(msg) if msg == MISSING_ID_MESSAGE));
        }
    }

    #[tokio::test]
    async fn test_update_forwards_trimmed_id() {
        let mut repo = MockHotelRepository::new();
        repo.expect_update()
            .withf(|id: &str, _: &HotelUpdate| id == "h1")
            .times(1)
            .returning(|id, changes| {
                let mut hotel = stored(id, &NewHotel::new("Old", "Rome", "Via Roma 1", 80.0));
                changes.apply_to(&mut hotel);
                Ok(hotel)
            });

        let service = HotelService::new(Arc::new(repo));
        let changes = HotelUpdate {
            name: Some("New".to_string()),
            ..HotelUpdate::default()
        };
        let updated = service.update(Some(" h1 "), changes).await.unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(updated.location, "Rome");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut repo = MockHotelRepository::new();
        repo.expect_update()
            .returning(|id, _| Err(RepositoryError::NotFound(format!("hotel {id}"))));

        let service = HotelService::new(Arc::new(repo));
        let err = service
            .update(Some("missing"), HotelUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
