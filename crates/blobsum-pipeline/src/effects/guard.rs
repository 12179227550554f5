use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::JobError;

/// Races job steps against the job's cancellation token and, for storage
/// calls, the configured timeout.
pub(crate) struct Guard<'a> {
    cancel:  &'a CancellationToken,
    timeout: Option<Duration>,
}

impl<'a> Guard<'a> {
    pub(crate) fn new(cancel: &'a CancellationToken, timeout: Option<Duration>) -> Self {
        Self { cancel, timeout }
    }

    /// Run a storage call under cancellation and timeout.
    pub(crate) async fn storage<T, E, F>(&self, op: &'static str, call: F) -> Result<T, JobError>
    where
        F: Future<Output = Result<T, E>>,
        JobError: From<E>,
    {
        let timeout = self.timeout;
        self.local::<T, JobError, _>(async move {
            match timeout {
                Some(timeout) => tokio::time::timeout(timeout, call)
                    .await
                    .map_err(|_| JobError::Timeout { op, timeout })?
                    .map_err(JobError::from),
                None => call.await.map_err(JobError::from),
            }
        })
        .await
    }

    /// Run a local step under cancellation only.
    pub(crate) async fn local<T, E, F>(&self, step: F) -> Result<T, JobError>
    where
        F: Future<Output = Result<T, E>>,
        JobError: From<E>,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(JobError::Cancelled),
            result = step => result.map_err(JobError::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn passes_results_through() {
        let cancel = CancellationToken::new();
        let guard = Guard::new(&cancel, None);
        let value = guard
            .storage("op", async { Ok::<_, io::Error>(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn cancelled_token_wins() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let guard = Guard::new(&cancel, None);
        let err = guard
            .local(async { Ok::<_, io::Error>(()) })
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_storage_times_out() {
        let cancel = CancellationToken::new();
        let guard = Guard::new(&cancel, Some(Duration::from_secs(5)));
        let err = guard
            .storage("get blob", async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, io::Error>(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, JobError::Timeout { op: "get blob", .. }));
    }
}
