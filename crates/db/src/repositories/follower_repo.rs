//! Follower-specific queries beyond the generic CRUD set.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::entity::Entity;
use crate::models::follower::Follower;
use crate::repositories::entity_repo::column_list;

/// Lookups on the `follower` edge table.
pub struct FollowerRepo;

impl FollowerRepo {
    /// Find the edge `follower_id -> followed_id`, if it exists.
    pub async fn find_by_pair(
        pool: &PgPool,
        followed_id: DbId,
        follower_id: DbId,
    ) -> Result<Option<Follower>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE followed_id = $1 AND follower_id = $2",
            column_list::<Follower>(),
            Follower::TABLE
        );
        sqlx::query_as::<_, Follower>(&query)
            .bind(followed_id)
            .bind(follower_id)
            .fetch_optional(pool)
            .await
    }
}
