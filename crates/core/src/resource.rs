//! Resource naming and the human-readable messages built from it.
//!
//! Every entity exposed over HTTP carries a static [`ResourceNames`]. Error
//! responses are worded from those names so each resource reports failures
//! in its own terms ("Something went wrong while retrieving the
//! categories") without per-handler string literals.

use std::fmt;

/// Static naming for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceNames {
    /// Capitalized display name, e.g. `"Brand"`.
    pub label: &'static str,
    /// Lowercase singular, e.g. `"brand"`.
    pub singular: &'static str,
    /// Lowercase plural, e.g. `"brands"`.
    pub plural: &'static str,
    /// Entity that references this one through a foreign key, if any.
    pub referenced_by: Option<&'static str>,
}

/// The five operations of a resource handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::List | Operation::Get => "retrieve",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

impl Operation {
    fn gerund(self) -> &'static str {
        match self {
            Operation::List | Operation::Get => "retrieving",
            Operation::Create => "creating",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        }
    }
}

/// Generic failure wording for an operation that hit an unclassified error.
///
/// List operations name the plural; every other operation names the singular.
pub fn failure_message(operation: Operation, names: &ResourceNames) -> String {
    let noun = match operation {
        Operation::List => names.plural,
        _ => names.singular,
    };
    format!("Something went wrong while {} the {noun}", operation.gerund())
}

/// Message for a foreign-key violation.
///
/// On delete the row is still referenced elsewhere; on create/update the
/// input points at a row that does not exist.
pub fn referenced_message(operation: Operation, names: &ResourceNames) -> String {
    match (operation, names.referenced_by) {
        (Operation::Delete, Some(referrer)) => format!(
            "Cannot delete the {} because it is used by a {referrer}",
            names.singular
        ),
        (Operation::Delete, None) => format!(
            "Cannot delete the {} because it is still referenced",
            names.singular
        ),
        _ => format!(
            "The {} references a record that does not exist",
            names.singular
        ),
    }
}

/// Message for a unique-constraint violation.
pub fn duplicate_message(names: &ResourceNames) -> String {
    format!("A {} with the same values already exists", names.singular)
}

/// Message for a NOT NULL violation on insert or update.
pub fn missing_field_message(names: &ResourceNames) -> String {
    format!("The {} is missing a required field", names.singular)
}
