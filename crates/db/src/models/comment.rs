//! Comment entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};
use storefront_core::resource::ResourceNames;
use storefront_core::types::DbId;

use crate::entity::Entity;

/// A row from the `comment` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    /// Author of the comment.
    pub user_id: Option<DbId>,
    /// Product the comment is attached to.
    pub product_id: Option<DbId>,
    pub content: String,
}

/// DTO for creating or patching a comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CommentInput {
    pub user_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub content: Option<String>,
}

impl Entity for Comment {
    type Input = CommentInput;

    const NAMES: ResourceNames = ResourceNames {
        label: "Comment",
        singular: "comment",
        plural: "comments",
        referenced_by: None,
    };
    const TABLE: &'static str = "comment";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "product_id", "content"];
    const WRITABLE: &'static [&'static str] = &["user_id", "product_id", "content"];

    fn bind_input(input: &CommentInput, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(input.user_id)?;
        args.add(input.product_id)?;
        args.add(&input.content)?;
        Ok(())
    }
}
