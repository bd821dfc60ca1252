use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The record store could not execute a query. Distinct from an empty result.
    #[error("Database error: {0}")]
    DatabaseError(String),
}
