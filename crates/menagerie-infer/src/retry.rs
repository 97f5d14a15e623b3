//! Bounded retry with exponential backoff for embedding calls.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::embedder::EmbeddingProvider;
use menagerie_core::Result;

const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Delay before retry number `attempt` (1-based): base, 2×base, 4×base, …
/// capped at ten seconds.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 1u32 << attempt.saturating_sub(1).min(16);
    base.saturating_mul(factor).min(MAX_BACKOFF)
}

/// Retries transient failures of the wrapped provider.
pub struct RetryingEmbedder<P> {
    inner: P,
    max_attempts: u32,
    base_delay: Duration,
}

impl<P: EmbeddingProvider> RetryingEmbedder<P> {
    /// `max_attempts` counts the first call; values below 1 are treated as 1.
    pub fn new(inner: P, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    async fn with_retry<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let delay = backoff_delay(self.base_delay, attempt);
                    warn!(
                        "{} embedding attempt {}/{} failed: {}. Retrying in {:?}",
                        self.inner.name(),
                        attempt,
                        self.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl<P: EmbeddingProvider> EmbeddingProvider for RetryingEmbedder<P> {
    async fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>> {
        self.with_retry(move || self.inner.embed(text, dimensions))
            .await
    }

    async fn embed_batch(&self, texts: &[String], dimensions: usize) -> Result<Vec<Vec<f32>>> {
        self.with_retry(move || self.inner.embed_batch(texts, dimensions))
            .await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::Error;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` calls with the given error kind.
    struct Flaky {
        calls: AtomicU32,
        failures: u32,
        transient: bool,
    }

    impl Flaky {
        fn new(failures: u32, transient: bool) -> Self {
            Self {
                calls: AtomicU32::new(0),
                failures,
                transient,
            }
        }
    }

    #[async_trait]
    impl EmbeddingProvider for Flaky {
        async fn embed(&self, _text: &str, dimensions: usize) -> Result<Vec<f32>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(if self.transient {
                    Error::Http("503".into())
                } else {
                    Error::Provider("401".into())
                });
            }
            Ok(vec![1.0; dimensions])
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn test_recovers_from_transient_failures() {
        let embedder = RetryingEmbedder::new(Flaky::new(2, true), 3, Duration::ZERO);
        assert_eq!(embedder.embed("q", 2).await.unwrap(), vec![1.0, 1.0]);
        assert_eq!(embedder.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let embedder = RetryingEmbedder::new(Flaky::new(5, true), 3, Duration::ZERO);
        assert!(matches!(embedder.embed("q", 2).await, Err(Error::Http(_))));
        assert_eq!(embedder.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_does_not_retry_permanent_failures() {
        let embedder = RetryingEmbedder::new(Flaky::new(1, false), 5, Duration::ZERO);
        assert!(matches!(
            embedder.embed("q", 2).await,
            Err(Error::Provider(_))
        ));
        assert_eq!(embedder.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_single_attempt_never_retries() {
        let embedder = RetryingEmbedder::new(Flaky::new(1, true), 0, Duration::ZERO);
        assert!(embedder.embed("q", 2).await.is_err());
        assert_eq!(embedder.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let base = Duration::from_millis(250);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(250));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(500));
        assert_eq!(backoff_delay(base, 3), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 20), Duration::from_secs(10));
    }
}
