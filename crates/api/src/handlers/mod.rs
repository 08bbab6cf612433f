//! Request handlers.
//!
//! [`resource`] provides the list/get/create/update/delete handlers once,
//! generically over every entity. [`follower`] adds the composite-key
//! lookup specific to follower edges.

pub mod follower;
pub mod resource;
