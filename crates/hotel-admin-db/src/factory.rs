//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use hotel_admin_core::Repos;
use hotel_admin_core::services::AppCore;

use crate::repositories::SqliteHotelRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteHotelRepository::new(pool)))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// ```ignore
    /// use hotel_admin_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(pool);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Create a hotel repository from a pool.
    pub fn hotel_repository(pool: SqlitePool) -> Arc<SqliteHotelRepository> {
        Arc::new(SqliteHotelRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a hotel repository using this test database.
    pub fn hotel_repository(&self) -> SqliteHotelRepository {
        SqliteHotelRepository::new(self.pool.clone())
    }

    /// Build an `AppCore` over this test database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }

    /// Attach a room to an existing hotel.
    ///
    /// Rooms are read-only through the repository port, so fixtures write
    /// them directly.
    pub async fn insert_room(&self, hotel_id: &str, name: &str) -> anyhow::Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO rooms (id, hotel_id, name) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(hotel_id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    /// Number of stored hotels, bypassing any filter.
    pub async fn hotel_count(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
