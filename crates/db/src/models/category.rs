//! Category entity model and DTO.
//!
//! Products reference categories by foreign key, so a category that is
//! still in use cannot be deleted.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};
use storefront_core::resource::ResourceNames;
use storefront_core::types::DbId;

use crate::entity::Entity;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub category_name: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for creating or patching a category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CategoryInput {
    pub category_name: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
}

impl Entity for Category {
    type Input = CategoryInput;

    const NAMES: ResourceNames = ResourceNames {
        label: "Category",
        singular: "category",
        plural: "categories",
        referenced_by: Some("product"),
    };
    const TABLE: &'static str = "category";
    const COLUMNS: &'static [&'static str] = &["id", "category_name", "image", "image_url"];
    const WRITABLE: &'static [&'static str] = &["category_name", "image", "image_url"];

    fn bind_input(input: &CategoryInput, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(&input.category_name)?;
        args.add(&input.image)?;
        args.add(&input.image_url)?;
        Ok(())
    }
}
