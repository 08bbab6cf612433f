//! Route definitions for follower edges.

use axum::routing::get;
use axum::Router;
use storefront_db::models::follower::Follower;

use crate::handlers::follower;
use crate::routes::resource;
use crate::state::AppState;

/// Routes mounted at `/followers`.
///
/// ```text
/// (generic resource routes)
/// GET  /{followed_id}/{follower_id}   -> get_by_pair
/// ```
pub fn router() -> Router<AppState> {
    resource::router::<Follower>().route(
        "/{followed_id}/{follower_id}",
        get(follower::get_by_pair),
    )
}
