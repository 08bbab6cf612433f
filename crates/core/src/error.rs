//! Domain errors shared by the storage and HTTP layers.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the identifier of an update or delete.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}
