//! Generic repository over any [`Entity`].
//!
//! Statement text is derived from the entity's static column lists; request
//! values only ever travel as bound parameters.

use sqlx::postgres::PgArguments;
use sqlx::{Arguments, PgPool};
use storefront_core::types::DbId;

use crate::entity::Entity;

/// Provides CRUD operations for every entity table.
pub struct EntityRepo;

impl EntityRepo {
    /// Fetch every row of the table. Order is whatever the database returns.
    pub async fn list<E: Entity>(pool: &PgPool) -> Result<Vec<E>, sqlx::Error> {
        let query = select_all_sql::<E>();
        sqlx::query_as::<_, E>(&query).fetch_all(pool).await
    }

    /// Find a row by its primary key.
    pub async fn find_by_id<E: Entity>(pool: &PgPool, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = select_by_key_sql::<E>();
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new row from `input`, returning the generated key.
    pub async fn create<E: Entity>(pool: &PgPool, input: &E::Input) -> Result<DbId, sqlx::Error> {
        let query = insert_sql::<E>();
        let mut args = PgArguments::default();
        E::bind_input(input, &mut args).map_err(sqlx::Error::Encode)?;
        sqlx::query_scalar_with::<_, DbId, _>(&query, args)
            .fetch_one(pool)
            .await
    }

    /// Update a row. `None` fields in `input` keep the stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<E: Entity>(
        pool: &PgPool,
        id: DbId,
        input: &E::Input,
    ) -> Result<Option<E>, sqlx::Error> {
        let query = update_sql::<E>();
        let mut args = PgArguments::default();
        args.add(id).map_err(sqlx::Error::Encode)?;
        E::bind_input(input, &mut args).map_err(sqlx::Error::Encode)?;
        sqlx::query_as_with::<_, E, _>(&query, args)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by primary key. Returns `true` if a row was removed.
    pub async fn delete<E: Entity>(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = delete_sql::<E>();
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn column_list<E: Entity>() -> String {
    E::COLUMNS.join(", ")
}

fn select_all_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", column_list::<E>(), E::TABLE)
}

fn select_by_key_sql<E: Entity>() -> String {
    format!("{} WHERE {} = $1", select_all_sql::<E>(), E::KEY)
}

fn insert_sql<E: Entity>() -> String {
    let placeholders: Vec<String> = (1..=E::WRITABLE.len()).map(|n| format!("${n}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        E::WRITABLE.join(", "),
        placeholders.join(", "),
        E::KEY
    )
}

/// `$1` is the key; writable columns follow from `$2`.
fn update_sql<E: Entity>() -> String {
    let assignments: Vec<String> = E::WRITABLE
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = COALESCE(${}, {column})", i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1 RETURNING {}",
        E::TABLE,
        assignments.join(", "),
        E::KEY,
        column_list::<E>()
    )
}

fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY)
}
