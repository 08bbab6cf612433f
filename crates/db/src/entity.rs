//! The descriptor every persisted entity implements.
//!
//! A single [`Entity`] impl tells the generic repository which table to hit,
//! which columns to select, which columns a client may write, and how to bind
//! those writable values. The repository and the HTTP handlers are written
//! once against this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::FromRow;
use storefront_core::resource::ResourceNames;

/// A row-shaped record in one relational table.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Writable column set. Used for both create and partial update; every
    /// field is optional and an absent field binds as SQL `NULL`.
    type Input: DeserializeOwned + Serialize + Send + Sync + 'static;

    const NAMES: ResourceNames;
    const TABLE: &'static str;
    /// Primary-key column.
    const KEY: &'static str = "id";
    /// Full select list, key first.
    const COLUMNS: &'static [&'static str];
    /// Writable columns, in the order [`Entity::bind_input`] binds them.
    const WRITABLE: &'static [&'static str];

    /// Append the writable values of `input` to `args` in [`Entity::WRITABLE`] order.
    fn bind_input(input: &Self::Input, args: &mut PgArguments) -> Result<(), BoxDynError>;
}
