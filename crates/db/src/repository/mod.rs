//! Repository functions — one function per database operation.
//!
//! Every function takes the `&mut PgConnection` the caller checked out for
//! its request and returns a `Result<T, DbError>`.  No HTTP concerns, no
//! response shapes — pure SQL.

pub mod jobs;
pub mod employees;
pub mod job_history;
