//! Brand entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};
use storefront_core::resource::ResourceNames;
use storefront_core::types::DbId;

use crate::entity::Entity;

/// A row from the `brand` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    /// Encoded image payload (base64 or data URI).
    pub image: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for creating or patching a brand.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BrandInput {
    pub name: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
}

impl Entity for Brand {
    type Input = BrandInput;

    const NAMES: ResourceNames = ResourceNames {
        label: "Brand",
        singular: "brand",
        plural: "brands",
        referenced_by: None,
    };
    const TABLE: &'static str = "brand";
    const COLUMNS: &'static [&'static str] = &["id", "name", "image", "image_url"];
    const WRITABLE: &'static [&'static str] = &["name", "image", "image_url"];

    fn bind_input(input: &BrandInput, args: &mut PgArguments) -> Result<(), BoxDynError> {
        args.add(&input.name)?;
        args.add(&input.image)?;
        args.add(&input.image_url)?;
        Ok(())
    }
}
