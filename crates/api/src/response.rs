//! Response payloads shared across handlers.

use serde::Serialize;
use storefront_core::types::DbId;

/// Body returned by a create: the generated key merged with the input that
/// was submitted.
///
/// This echoes the request rather than re-reading the row, so database-side
/// defaults are not reflected.
#[derive(Debug, Serialize)]
pub struct Created<T: Serialize> {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: T,
}
