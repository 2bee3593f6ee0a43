//! Global concurrency limiter for page fetches
//!
//! One limiter is shared by every fetch task in a run. Permits are owned and
//! released on drop, so a slot is returned on every exit path, success or
//! failure. There is no fairness guarantee on which waiting task gets a freed
//! slot, only boundedness.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// General-purpose default; the europarl configuration defaults to 8 instead
/// (see the config module).
pub const DEFAULT_MAX_CONNECTIONS: usize = 3;

/// Caps the number of simultaneously in-flight fetches
#[derive(Debug, Clone)]
pub struct FetchLimiter {
    semaphore: Arc<Semaphore>,
}

impl FetchLimiter {
    /// Creates a limiter allowing at most `max_connections` concurrent fetches
    pub fn new(max_connections: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_connections)),
        }
    }

    /// Acquires a fetch slot, waiting until one is free
    ///
    /// The returned permit releases its slot when dropped.
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("limiter semaphore is never closed")
    }
}

impl Default for FetchLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONNECTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrency_never_exceeds_limit() {
        let limiter = FetchLimiter::new(3);
        let in_flight = Arc::new(AtomicUsize::new(0));
        let observed_max = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let limiter = limiter.clone();
            let in_flight = in_flight.clone();
            let observed_max = observed_max.clone();
            handles.push(tokio::spawn(async move {
                let _permit = limiter.acquire().await;
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                observed_max.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }));
        }

        for handle in handles {
            handle.await.expect("task completed");
        }

        assert!(observed_max.load(Ordering::SeqCst) <= 3);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_permit_released_on_drop() {
        let limiter = FetchLimiter::new(1);

        {
            let _permit = limiter.acquire().await;
        }

        // Would hang forever if the first permit leaked
        let _second = limiter.acquire().await;
    }

    #[test]
    fn test_default_limit() {
        let limiter = FetchLimiter::default();
        assert_eq!(limiter.semaphore.available_permits(), DEFAULT_MAX_CONNECTIONS);
    }
}
