//! Route definitions shared by every entity resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource::{self, Resource};
use crate::state::AppState;

/// Routes for one resource, mounted at its plural path segment.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router<E: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<E>).post(resource::create::<E>))
        .route(
            "/{id}",
            get(resource::get_by_id::<E>)
                .patch(resource::update::<E>)
                .delete(resource::delete::<E>),
        )
}
