//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, schema bootstrap, typed row structs, and
//! repository functions for the `jobs`, `employees` and `job_history`
//! tables.  No HTTP concerns live here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
