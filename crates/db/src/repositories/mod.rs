//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod entity_repo;
pub mod follower_repo;

pub use entity_repo::EntityRepo;
pub use follower_repo::FollowerRepo;
