//! Opening the hotel database and creating its tables.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Statements run on every open, in order. All are idempotent.
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS hotels (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        name_lower TEXT NOT NULL,
        description TEXT,
        location TEXT NOT NULL,
        address TEXT NOT NULL,
        rating REAL NOT NULL DEFAULT 0,
        photos TEXT NOT NULL DEFAULT '[]',
        price_per_night REAL NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_hotels_name ON hotels(name_lower)",
    "CREATE INDEX IF NOT EXISTS idx_hotels_rating ON hotels(rating)",
    "CREATE INDEX IF NOT EXISTS idx_hotels_price ON hotels(price_per_night)",
    r"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY NOT NULL,
        hotel_id TEXT NOT NULL,
        name TEXT NOT NULL,
        FOREIGN KEY (hotel_id) REFERENCES hotels(id) ON DELETE CASCADE
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_rooms_hotel ON rooms(hotel_id)",
];

/// Open (creating if needed) the database at `db_path` and apply the schema.
///
/// The parent directory is created when missing.
///
/// ```rust,no_run
/// # async fn example() -> anyhow::Result<()> {
/// let pool = hotel_admin_db::setup_database(std::path::Path::new("hotels.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    tracing::debug!(target: "hotel_admin.db", path = %db_path.display(), "database ready");

    Ok(pool)
}

/// Fresh in-memory database with the production schema.
///
/// Each in-memory connection is a separate database, so the pool is pinned
/// to one connection that never idles out.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(
            SqliteConnectOptions::new()
                .in_memory(true)
                .foreign_keys(true),
        )
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    for &statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
