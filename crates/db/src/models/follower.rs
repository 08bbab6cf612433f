//! Follower relationship model and DTO.
//!
//! Each row is a directed edge `follower_id -> followed_id` in the
//! many-to-many "follows" graph between users. Besides its surrogate `id`,
//! an edge is identified by the `(followed_id, follower_id)` pair, which is
//! unique.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};
use storefront_core::resource::ResourceNames;
use storefront_core::types::DbId;

use crate::entity::Entity;

/// A row from the `follower` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Follower {
    pub id: DbId,
    /// The user doing the following.
    pub follower_id: DbId,
    /// The user being followed.
    pub followed_id: DbId,
}

/// DTO for creating or patching a follower edge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FollowerInput {
    pub follower_id: Option<DbId>,
    pub followed_id: Option<DbId>,
}

impl Entity for Follower {
    type Input = FollowerInput;

    const NAMES: ResourceNames = ResourceNames {
        label: "Follower",
        singular: "follower",
        plural: "followers",
        referenced_by: None,
    };
    const TABLE: &'static str = "follower";
    const COLUMNS: &'static [&'static str] = &["id", "follower_id", "followed_id"];
    const WRITABLE: &'static [&'static str] = &["follower_id", "followed_id"];

    fn bind_input(input: &FollowerInput, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(input.follower_id)?;
        args.add(input.followed_id)?;
        Ok(())
    }
}
