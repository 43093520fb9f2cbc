//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No row with the requested primary key. Carries the entity label
    /// used in client-facing messages.
    #[error("{0} not found")]
    NotFound(&'static str),
}
