//! Database layer for the storefront service.
//!
//! Owns the connection pool, the entity models, the SQL repositories, and
//! the [`store`] traits through which the HTTP layer reaches the database.

use sqlx::postgres::PgPoolOptions;

pub mod entity;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use entity::Entity;
pub use error::StoreError;
pub use store::{EntityStore, FollowerLookup, PgStore, StoreHealth};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial statement to confirm the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
