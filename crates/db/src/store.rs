//! Store traits: the seam between HTTP handlers and the database.
//!
//! Handlers hold these as `Arc<dyn …>` trait objects so the pool is injected
//! once at startup and can be swapped for an in-memory store in tests.
//! [`PgStore`] is the production implementation backed by the repositories.

use async_trait::async_trait;
use storefront_core::types::DbId;

use crate::entity::Entity;
use crate::error::StoreError;
use crate::models::follower::Follower;
use crate::repositories::{EntityRepo, FollowerRepo};
use crate::DbPool;

/// The five CRUD operations for one entity type.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every stored row, in unspecified order.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError>;

    /// Insert a row and return its generated key.
    async fn create(&self, input: &E::Input) -> Result<DbId, StoreError>;

    /// Apply a partial update. `None` when no row has `id`.
    async fn update(&self, id: DbId, input: &E::Input) -> Result<Option<E>, StoreError>;

    /// `true` when a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Composite-key lookup on follower edges.
#[async_trait]
pub trait FollowerLookup: Send + Sync {
    async fn find_by_pair(
        &self,
        followed_id: DbId,
        follower_id: DbId,
    ) -> Result<Option<Follower>, StoreError>;
}

/// Liveness probe for the backing database.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Postgres-backed store for every entity.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for PgStore {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(EntityRepo::list::<E>(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError> {
        Ok(EntityRepo::find_by_id::<E>(&self.pool, id).await?)
    }

    async fn create(&self, input: &E::Input) -> Result<DbId, StoreError> {
        Ok(EntityRepo::create::<E>(&self.pool, input).await?)
    }

    async fn update(&self, id: DbId, input: &E::Input) -> Result<Option<E>, StoreError> {
        Ok(EntityRepo::update::<E>(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(EntityRepo::delete::<E>(&self.pool, id).await?)
    }
}

#[async_trait]
impl FollowerLookup for PgStore {
    async fn find_by_pair(
        &self,
        followed_id: DbId,
        follower_id: DbId,
    ) -> Result<Option<Follower>, StoreError> {
        Ok(FollowerRepo::find_by_pair(&self.pool, followed_id, follower_id).await?)
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
