//! Shared primitives for the storefront service: identifier types,
//! domain errors, and the naming/message rules every resource follows.

pub mod error;
pub mod resource;
pub mod types;
