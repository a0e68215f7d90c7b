//! Blocking work dispatch
//!
//! Runs blocking store calls on tokio's blocking thread pool so the task
//! reading MCP messages keeps serving other requests.

use crate::error::{StoreError, StoreResult};

/// Submits blocking units of work and awaits their completion
#[derive(Debug, Clone, Default)]
pub struct BlockingPool;

impl BlockingPool {
    /// Create a new pool handle
    pub fn new() -> Self {
        Self
    }

    /// Run `job` on a worker thread and wait for its result.
    ///
    /// There is no timeout: the caller waits until the job returns.
    pub async fn run<F, T>(&self, label: &'static str, job: F) -> StoreResult<T>
    where
        F: FnOnce() -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        tracing::debug!("Dispatching {} to worker", label);

        match tokio::task::spawn_blocking(job).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Worker running {} failed: {}", label, e);
                Err(StoreError::WorkerFailed {
                    message: e.to_string(),
                })
            }
        }
    }
}
