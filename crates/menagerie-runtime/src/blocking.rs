//! Runs synchronous store work on tokio's blocking pool.

use menagerie_core::{Error, Result};

/// Run `f` on the blocking pool and flatten its result.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Storage(format!("Blocking store task failed: {}", e)))?
}
