//! Generic handlers for entity resources.
//!
//! Each handler binds path/body input, makes one store call, and shapes the
//! result. The entity type parameter selects the store, the table, and the
//! wording of any error.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::resource::Operation;
use storefront_core::types::DbId;
use storefront_db::models::brand::Brand;
use storefront_db::models::category::Category;
use storefront_db::models::comment::Comment;
use storefront_db::models::follower::Follower;
use storefront_db::{Entity, EntityStore};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::Created;
use crate::state::AppState;

/// An [`Entity`] served over HTTP, tied to the store that holds it.
pub trait Resource: Entity {
    fn store(state: &AppState) -> &dyn EntityStore<Self>;
}

impl Resource for Brand {
    fn store(state: &AppState) -> &dyn EntityStore<Self> {
        state.brands.as_ref()
    }
}

impl Resource for Category {
    fn store(state: &AppState) -> &dyn EntityStore<Self> {
        state.categories.as_ref()
    }
}

impl Resource for Comment {
    fn store(state: &AppState) -> &dyn EntityStore<Self> {
        state.comments.as_ref()
    }
}

impl Resource for Follower {
    fn store(state: &AppState) -> &dyn EntityStore<Self> {
        state.followers.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /{resource}
pub async fn list<E: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>> {
    let rows = E::store(&state)
        .list()
        .await
        .map_err(AppError::store::<E>(Operation::List))?;
    Ok(Json(rows))
}

/// GET /{resource}/{id}
///
/// An unknown id answers 200 with an empty body rather than 404.
pub async fn get_by_id<E: Resource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Response> {
    let row = E::store(&state)
        .find_by_id(id)
        .await
        .map_err(AppError::store::<E>(Operation::Get))?;
    Ok(found_or_empty(row))
}

/// POST /{resource}
///
/// Responds with the generated id merged with the submitted fields.
pub async fn create<E: Resource>(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<E::Input>,
) -> AppResult<Json<Created<E::Input>>> {
    let id = E::store(&state)
        .create(&input)
        .await
        .map_err(AppError::store::<E>(Operation::Create))?;

    tracing::info!(entity = E::NAMES.singular, id, "Entity created");

    Ok(Json(Created { id, fields: input }))
}

/// PATCH /{resource}/{id}
///
/// Absent or `null` fields keep their stored value. Responds with the single
/// updated row.
pub async fn update<E: Resource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<E::Input>,
) -> AppResult<Json<E>> {
    let row = E::store(&state)
        .update(id, &input)
        .await
        .map_err(AppError::store::<E>(Operation::Update))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::NAMES.label,
        }))?;

    tracing::info!(entity = E::NAMES.singular, id, "Entity updated");

    Ok(Json(row))
}

/// DELETE /{resource}/{id}
pub async fn delete<E: Resource>(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    let deleted = E::store(&state)
        .delete(id)
        .await
        .map_err(AppError::store::<E>(Operation::Delete))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: E::NAMES.label,
        }));
    }

    tracing::info!(entity = E::NAMES.singular, id, "Entity deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// 200 with the row as JSON, or 200 with an empty body when there is none.
pub(crate) fn found_or_empty<T: serde::Serialize>(row: Option<T>) -> Response {
    match row {
        Some(row) => Json(row).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
