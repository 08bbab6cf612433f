//! Follower-edge handlers beyond the generic resource set.

use axum::extract::State;
use axum::response::Response;
use storefront_core::resource::Operation;
use storefront_core::types::DbId;
use storefront_db::models::follower::Follower;

use crate::error::{AppError, AppResult};
use crate::extract::PathParam;
use crate::handlers::resource::found_or_empty;
use crate::state::AppState;

/// GET /followers/{followed_id}/{follower_id}
///
/// Fetch the edge in which `follower_id` follows `followed_id`. Like the
/// single-key lookup, a missing edge answers 200 with an empty body.
pub async fn get_by_pair(
    State(state): State<AppState>,
    PathParam((followed_id, follower_id)): PathParam<(DbId, DbId)>,
) -> AppResult<Response> {
    let edge = state
        .follower_pairs
        .find_by_pair(followed_id, follower_id)
        .await
        .map_err(AppError::store::<Follower>(Operation::Get))?;
    Ok(found_or_empty(edge))
}
