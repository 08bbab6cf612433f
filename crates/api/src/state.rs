use std::sync::Arc;

use storefront_db::models::brand::Brand;
use storefront_db::models::category::Category;
use storefront_db::models::comment::Comment;
use storefront_db::models::follower::Follower;
use storefront_db::{DbPool, EntityStore, FollowerLookup, PgStore, StoreHealth};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Each resource reaches the database only through its store. The binary
/// wires every field to one [`PgStore`]; tests substitute their own.
#[derive(Clone)]
pub struct AppState {
    pub brands: Arc<dyn EntityStore<Brand>>,
    pub categories: Arc<dyn EntityStore<Category>>,
    pub comments: Arc<dyn EntityStore<Comment>>,
    pub followers: Arc<dyn EntityStore<Follower>>,
    /// Composite `(followed, follower)` lookups.
    pub follower_pairs: Arc<dyn FollowerLookup>,
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// State backed by a single Postgres connection pool.
    pub fn postgres(pool: DbPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            brands: store.clone(),
            categories: store.clone(),
            comments: store.clone(),
            followers: store.clone(),
            follower_pairs: store.clone(),
            health: store,
        }
    }
}
