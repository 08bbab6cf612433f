pub mod follower;
pub mod health;
pub mod resource;

use axum::Router;
use storefront_db::models::brand::Brand;
use storefront_db::models::category::Category;
use storefront_db::models::comment::Comment;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /brands                                   list, create
/// /brands/{id}                              get, update, delete
///
/// /categories                               list, create
/// /categories/{id}                          get, update, delete
///
/// /comments                                 list, create
/// /comments/{id}                            get, update, delete
///
/// /followers                                list, create
/// /followers/{id}                           get, update, delete
/// /followers/{followed_id}/{follower_id}    get edge by pair
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/brands", resource::router::<Brand>())
        .nest("/categories", resource::router::<Category>())
        .nest("/comments", resource::router::<Comment>())
        .nest("/followers", follower::router())
}
