//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::HotelService;

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = hotel_admin_db::factory::build_repos(&pool);
/// let core = AppCore::new(repos);
///
/// let page = core.hotels().list(&HotelListQuery::default()).await?;
/// ```
pub struct AppCore {
    hotels: HotelService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            hotels: HotelService::new(repos.hotels),
        }
    }

    /// Access the hotel service.
    pub const fn hotels(&self) -> &HotelService {
        &self.hotels
    }
}
