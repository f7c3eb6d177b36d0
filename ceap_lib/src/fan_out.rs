//! Bounded-concurrency fan-out over a list of async units of work.
//!
//! Uses the Semaphore + JoinSet pattern: one task per item, gated on a
//! fixed pool of permits, with a politeness delay held through each
//! permit after the work completes. Individual failures are caught and
//! recorded; the batch always runs to completion.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Concurrency budget for [`map_limit`].
#[derive(Clone, Copy, Debug)]
pub struct FanOutConfig {
    /// Maximum simultaneously in-flight workers. Values below 1 are
    /// clamped to 1.
    pub limit: usize,
    /// Delay held after each completed unit, before its permit is
    /// released to the next waiting worker.
    pub delay: Duration,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            delay: Duration::from_millis(100),
        }
    }
}

/// One item's recorded failure: its input index and the worker's error.
#[derive(Debug)]
pub struct FanOutFailure<E> {
    pub index: usize,
    pub error: E,
}

/// The outcome of a fan-out batch. `results` carries `(input index,
/// value)` pairs in completion order, which is not input order; `failures`
/// is sorted by index.
#[derive(Debug)]
pub struct FanOutOutcome<T, E> {
    pub results: Vec<(usize, T)>,
    pub failures: Vec<FanOutFailure<E>>,
}

/// Maps `worker` over `items` with at most `config.limit` invocations in
/// flight at once.
///
/// A failing item is logged and recorded in the outcome's `failures`; it
/// never aborts the batch or disturbs the other items. The returned future
/// itself always resolves.
pub async fn map_limit<I, T, E, F, Fut>(
    items: Vec<I>,
    config: FanOutConfig,
    worker: F,
) -> FanOutOutcome<T, E>
where
    I: Send + 'static,
    T: Send + 'static,
    E: std::fmt::Display + Send + 'static,
    F: Fn(I, usize) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    let limit = config.limit.max(1);
    let semaphore = Arc::new(Semaphore::new(limit));
    let mut join_set = JoinSet::new();

    for (index, item) in items.into_iter().enumerate() {
        let sem = Arc::clone(&semaphore);
        let worker = worker.clone();
        let delay = config.delay;

        join_set.spawn(async move {
            let _permit = sem.acquire().await.expect("semaphore closed");
            let result = worker(item, index).await;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (index, result)
        });
    }

    let mut results = Vec::new();
    let mut failures: Vec<FanOutFailure<E>> = Vec::new();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, Ok(value))) => results.push((index, value)),
            Ok((index, Err(error))) => {
                tracing::warn!(index, error = %error, "fan-out item failed");
                failures.push(FanOutFailure { index, error });
            }
            Err(join_error) => {
                // A worker panicked; the pool keeps draining.
                tracing::error!(error = %join_error, "fan-out worker panicked");
            }
        }
    }

    failures.sort_by_key(|f| f.index);

    if !failures.is_empty() {
        tracing::warn!(
            failed = failures.len(),
            succeeded = results.len(),
            "fan-out finished with failures"
        );
    }

    FanOutOutcome { results, failures }
}
