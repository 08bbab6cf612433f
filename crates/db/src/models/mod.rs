//! Entity models and their input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO (all `Option` fields) for inserts and patches
//! - The [`Entity`](crate::Entity) impl describing its table

pub mod brand;
pub mod category;
pub mod comment;
pub mod follower;
