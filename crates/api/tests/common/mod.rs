//! Shared harness for HTTP-level tests.
//!
//! Requests go through the full production router and middleware stack via
//! `tower::ServiceExt::oneshot`. Stores are in-memory substitutes, so no
//! database is needed.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use storefront_api::config::{LogFormat, ServerConfig};
use storefront_api::router::{build_app_router, App};
use storefront_api::state::AppState;
use storefront_core::types::DbId;
use storefront_db::models::brand::Brand;
use storefront_db::models::category::Category;
use storefront_db::models::comment::Comment;
use storefront_db::models::follower::Follower;
use storefront_db::{Entity, EntityStore, FollowerLookup, StoreError, StoreHealth};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// How an entity behaves inside [`MemoryStore`]: mirrors the table's NOT NULL
/// and unique constraints and the COALESCE update rule.
pub trait Record: Entity + Clone {
    fn from_input(id: DbId, input: &Self::Input) -> Result<Self, StoreError>;

    /// Overwrite only the fields present in `input`.
    fn apply(&mut self, input: &Self::Input);

    /// Whether `self` and `other` collide on a unique constraint.
    fn collides_with(&self, _other: &Self) -> bool {
        false
    }
}

fn required<T: Clone>(value: &Option<T>, column: &str) -> Result<T, StoreError> {
    value.clone().ok_or_else(|| StoreError::MissingValue {
        column: Some(column.to_string()),
    })
}

fn keep_or_replace<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

fn keep_or_replace_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *slot = value.clone();
    }
}

impl Record for Brand {
    fn from_input(id: DbId, input: &Self::Input) -> Result<Self, StoreError> {
        Ok(Brand {
            id,
            name: required(&input.name, "name")?,
            image: input.image.clone(),
            image_url: input.image_url.clone(),
        })
    }

    fn apply(&mut self, input: &Self::Input) {
        keep_or_replace(&mut self.name, &input.name);
        keep_or_replace_opt(&mut self.image, &input.image);
        keep_or_replace_opt(&mut self.image_url, &input.image_url);
    }
}

impl Record for Category {
    fn from_input(id: DbId, input: &Self::Input) -> Result<Self, StoreError> {
        Ok(Category {
            id,
            category_name: required(&input.category_name, "category_name")?,
            image: input.image.clone(),
            image_url: input.image_url.clone(),
        })
    }

    fn apply(&mut self, input: &Self::Input) {
        keep_or_replace(&mut self.category_name, &input.category_name);
        keep_or_replace_opt(&mut self.image, &input.image);
        keep_or_replace_opt(&mut self.image_url, &input.image_url);
    }
}

impl Record for Comment {
    fn from_input(id: DbId, input: &Self::Input) -> Result<Self, StoreError> {
        Ok(Comment {
            id,
            user_id: input.user_id,
            product_id: input.product_id,
            content: required(&input.content, "content")?,
        })
    }

    fn apply(&mut self, input: &Self::Input) {
        keep_or_replace_opt(&mut self.user_id, &input.user_id);
        keep_or_replace_opt(&mut self.product_id, &input.product_id);
        keep_or_replace(&mut self.content, &input.content);
    }
}

impl Record for Follower {
    fn from_input(id: DbId, input: &Self::Input) -> Result<Self, StoreError> {
        Ok(Follower {
            id,
            follower_id: required(&input.follower_id, "follower_id")?,
            followed_id: required(&input.followed_id, "followed_id")?,
        })
    }

    fn apply(&mut self, input: &Self::Input) {
        keep_or_replace(&mut self.follower_id, &input.follower_id);
        keep_or_replace(&mut self.followed_id, &input.followed_id);
    }

    fn collides_with(&self, other: &Self) -> bool {
        self.id != other.id
            && self.follower_id == other.follower_id
            && self.followed_id == other.followed_id
    }
}

/// A table held in a `BTreeMap`, with BIGSERIAL-style ids starting at 1.
pub struct MemoryStore<E> {
    rows: Mutex<BTreeMap<DbId, E>>,
    next_id: AtomicI64,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E: Record> MemoryStore<E> {
    pub fn snapshot(&self) -> Vec<E> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn duplicate(rows: &BTreeMap<DbId, E>, candidate: &E) -> Option<StoreError> {
        rows.values()
            .any(|row| row.collides_with(candidate))
            .then(|| StoreError::Duplicate {
                constraint: Some(format!("uq_{}_pair", E::TABLE)),
            })
    }
}

#[async_trait]
impl<E: Record> EntityStore<E> for MemoryStore<E> {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, input: &E::Input) -> Result<DbId, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = E::from_input(id, input)?;
        if let Some(err) = Self::duplicate(&rows, &row) {
            return Err(err);
        }
        rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, id: DbId, input: &E::Input) -> Result<Option<E>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(mut row) = rows.get(&id).cloned() else {
            return Ok(None);
        };
        row.apply(input);
        if let Some(err) = Self::duplicate(&rows, &row) {
            return Err(err);
        }
        rows.insert(id, row.clone());
        Ok(Some(row))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[async_trait]
impl FollowerLookup for MemoryStore<Follower> {
    async fn find_by_pair(
        &self,
        followed_id: DbId,
        follower_id: DbId,
    ) -> Result<Option<Follower>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|edge| edge.followed_id == followed_id && edge.follower_id == follower_id)
            .cloned())
    }
}

/// Health probe that always succeeds.
pub struct Healthy;

#[async_trait]
impl StoreHealth for Healthy {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// A store whose every call fails with the error `make` produces.
pub struct FailingStore {
    make: fn() -> StoreError,
}

impl FailingStore {
    pub fn new(make: fn() -> StoreError) -> Self {
        Self { make }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for FailingStore {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Err((self.make)())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<E>, StoreError> {
        Err((self.make)())
    }

    async fn create(&self, _input: &E::Input) -> Result<DbId, StoreError> {
        Err((self.make)())
    }

    async fn update(&self, _id: DbId, _input: &E::Input) -> Result<Option<E>, StoreError> {
        Err((self.make)())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err((self.make)())
    }
}

#[async_trait]
impl FollowerLookup for FailingStore {
    async fn find_by_pair(
        &self,
        _followed_id: DbId,
        _follower_id: DbId,
    ) -> Result<Option<Follower>, StoreError> {
        Err((self.make)())
    }
}

#[async_trait]
impl StoreHealth for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err((self.make)())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// In-memory tables, kept so tests can inspect what was persisted.
pub struct Stores {
    pub brands: Arc<MemoryStore<Brand>>,
    pub categories: Arc<MemoryStore<Category>>,
    pub comments: Arc<MemoryStore<Comment>>,
    pub followers: Arc<MemoryStore<Follower>>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            brands: Arc::default(),
            categories: Arc::default(),
            comments: Arc::default(),
            followers: Arc::default(),
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            brands: self.brands.clone(),
            categories: self.categories.clone(),
            comments: self.comments.clone(),
            followers: self.followers.clone(),
            follower_pairs: self.followers.clone(),
            health: Arc::new(Healthy),
        }
    }
}

/// State in which every store fails with the error `make` produces.
pub fn failing_state(make: fn() -> StoreError) -> AppState {
    let store = Arc::new(FailingStore::new(make));
    AppState {
        brands: store.clone(),
        categories: store.clone(),
        comments: store.clone(),
        followers: store.clone(),
        follower_pairs: store.clone(),
        health: store,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

pub fn build_test_app(state: AppState) -> App {
    build_app_router(state, &test_config())
}

/// Fresh in-memory stores plus an app wired to them.
pub fn memory_app() -> (Stores, App) {
    let stores = Stores::new();
    let app = build_test_app(stores.state());
    (stores, app)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &App, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &App, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: &App, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &App, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &App, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PATCH, uri, body).await
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
