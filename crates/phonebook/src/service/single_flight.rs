//! Per-key deduplication of in-flight loads.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use phonebook_core::cache::CacheError;
use phonebook_core::service::Result;

type SharedLoad<T> = Shared<BoxFuture<'static, Result<T>>>;
type Registry<T> = Arc<Mutex<HashMap<String, SharedLoad<T>>>>;

/// Registry of in-flight loads keyed by cache key.
///
/// Each load runs on its own task, so it finishes and unregisters itself even
/// when every caller waiting on it is cancelled. While it runs, every caller
/// asking for the same key awaits it and receives a clone of its result,
/// errors included.
pub struct SingleFlight<T> {
    inflight: Registry<T>,
}

impl<T> Default for SingleFlight<T> {
    fn default() -> Self {
        Self {
            inflight: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Unregisters a key when its load task ends, including on panic.
struct Registration<T> {
    registry: Registry<T>,
    key: String,
}

impl<T> Drop for Registration<T> {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl<T> SingleFlight<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the load built by `make_load`, or joins the one already running for `key`.
    ///
    /// `make_load` is only called when no load is in flight for `key`.
    pub async fn run<F, Fut>(&self, key: String, make_load: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let load = {
            let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
            match inflight.get(&key) {
                Some(existing) => {
                    tracing::debug!(cache_key = %key, "Joining in-flight load");
                    existing.clone()
                }
                None => {
                    // The task cannot unregister before the insert below: it
                    // needs this lock to do so.
                    let registration = Registration {
                        registry: Arc::clone(&self.inflight),
                        key: key.clone(),
                    };
                    let load = make_load();
                    let task = tokio::spawn(async move {
                        let _registration = registration;
                        load.await
                    });
                    let shared = task
                        .map(|joined| {
                            joined.unwrap_or_else(|err| {
                                tracing::error!(error = %err, "In-flight load task failed");
                                let err = CacheError::OperationFailed(format!("load task failed: {err}"));
                                Err(err.into())
                            })
                        })
                        .boxed()
                        .shared();
                    inflight.insert(key, shared.clone());
                    shared
                }
            }
        };

        load.await
    }

    /// Number of loads currently registered.
    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use futures_util::future::join_all;
    use phonebook_core::service::{CollaboratorError, ServiceError};

    #[tokio::test]
    async fn test_concurrent_callers_share_one_load() {
        let flights: SingleFlight<u32> = SingleFlight::new();
        let loads = Arc::new(AtomicUsize::new(0));

        let callers = (0..10).map(|_| {
            let loads = Arc::clone(&loads);
            flights.run("hot".to_string(), move || async move {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(7)
            })
        });
        let results = join_all(callers).await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(results.into_iter().all(|r| r == Ok(7)));
        assert_eq!(flights.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_waiters_receive_the_same_error() {
        let flights: SingleFlight<u32> = SingleFlight::new();
        let loads = Arc::new(AtomicUsize::new(0));

        let callers = (0..4).map(|_| {
            let loads = Arc::clone(&loads);
            flights.run("failing".to_string(), move || async move {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Err(ServiceError::NotFound(9))
            })
        });
        let results = join_all(callers).await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(results
            .into_iter()
            .all(|r| r == Err(ServiceError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_distinct_keys_load_independently() {
        let flights: SingleFlight<String> = SingleFlight::new();
        let loads = Arc::new(AtomicUsize::new(0));

        let callers = ["a", "b", "c"].into_iter().map(|key| {
            let loads = Arc::clone(&loads);
            flights.run(key.to_string(), move || async move {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok(key.to_uppercase())
            })
        });
        let results = join_all(callers).await;

        assert_eq!(loads.load(Ordering::SeqCst), 3);
        assert_eq!(
            results,
            vec![Ok("A".to_string()), Ok("B".to_string()), Ok("C".to_string())]
        );
    }

    #[tokio::test]
    async fn test_sequential_calls_load_again() {
        let flights: SingleFlight<usize> = SingleFlight::new();
        let loads = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let loads = Arc::clone(&loads);
            flights
                .run("key".to_string(), move || async move {
                    Ok(loads.fetch_add(1, Ordering::SeqCst))
                })
                .await
                .unwrap();
        }

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_load_completes_after_every_caller_is_cancelled() {
        let flights: SingleFlight<u32> = SingleFlight::new();
        let loads = Arc::new(AtomicUsize::new(0));

        let first_loads = Arc::clone(&loads);
        let caller = flights.run("slow".to_string(), move || async move {
            first_loads.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(1)
        });
        let timed_out = tokio::time::timeout(Duration::from_millis(1), caller).await;
        assert!(timed_out.is_err());
        assert_eq!(flights.in_flight(), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(flights.in_flight(), 0);
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        // The finished load is gone, so the next caller starts a new one.
        let next_loads = Arc::clone(&loads);
        let result = flights
            .run("slow".to_string(), move || async move {
                next_loads.fetch_add(1, Ordering::SeqCst);
                Ok(2)
            })
            .await;

        assert_eq!(result, Ok(2));
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_panicking_load_fails_waiters_and_unregisters() {
        let flights: SingleFlight<u32> = SingleFlight::new();

        async fn exploding_load() -> Result<u32> {
            tokio::time::sleep(Duration::from_millis(10)).await;
            panic!("load blew up")
        }

        let callers = (0..3).map(|_| flights.run("panics".to_string(), exploding_load));
        let results = join_all(callers).await;

        assert!(results.into_iter().all(|r| matches!(
            r,
            Err(ServiceError::Collaborator(CollaboratorError::Cache(
                CacheError::OperationFailed(_)
            )))
        )));
        assert_eq!(flights.in_flight(), 0);
    }
}
