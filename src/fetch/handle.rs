//! Handle over a single in-flight fetch task.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A running fetch task plus the token that can abort it.
///
/// Cancellation is cooperative and idempotent: the task races its work
/// against the token and exits without delivering anything once the token
/// fires. Dropping the handle does not cancel the task.
#[derive(Debug)]
pub struct FetchHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Spawns a fetch whose settlement is delivered through `settle`, unless
    /// the returned handle is cancelled first.
    ///
    /// The race is biased toward cancellation, so a token that fired before
    /// the work completed always wins even when both are ready.
    pub fn spawn<F, T, S>(fut: F, settle: S) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        S: FnOnce(T) + Send + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = task_token.cancelled() => {}
                outcome = fut => settle(outcome),
            }
        });
        Self { token, task }
    }

    /// Requests cancellation. Safe to call more than once.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Waits for the task to finish, cancelled or not.
    ///
    /// Useful on shutdown and in tests that need the task fully retired
    /// before asserting on its side effects.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            if !e.is_cancelled() {
                tracing::warn!(error = %e, "fetch task failed to join");
            }
        }
    }
}
