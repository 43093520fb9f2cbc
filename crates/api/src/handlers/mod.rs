//! Route handlers, one module per resource.

pub mod jobs;
pub mod employees;
pub mod job_history;

use db::DbPool;

/// Shared handler state.  Handlers check out their own connection from the
/// pool for each request; nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
