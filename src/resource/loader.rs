use std::future::Future;

use futures_util::future::BoxFuture;
use parking_lot::Mutex;

use crate::errors::ApiError;

/// Zero-argument asynchronous producer behind a `ResourceLoader`.
pub type Producer<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

/// Point-in-time view of a resource for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Highest request epoch issued so far.
    pub epoch: u64,
}

#[derive(Debug)]
struct ResourceState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    epoch: u64,
    disposed: bool,
}

/// Generic async read abstraction: one instance per view-collection pairing,
/// owned by the view and torn down with it.
///
/// Every activation bumps a request epoch; only the outcome carrying the
/// highest issued epoch is ever applied, so overlapping `refetch` calls
/// resolve to the most-recently-issued result regardless of completion order.
/// There is no built-in retry; callers expose their own retry affordance.
pub struct ResourceLoader<T> {
    producer: Producer<T>,
    state: Mutex<ResourceState<T>>,
}

impl<T: Clone> ResourceLoader<T> {
    pub fn new(producer: Producer<T>) -> Self {
        Self {
            producer,
            state: Mutex::new(ResourceState {
                data: None,
                loading: false,
                error: None,
                epoch: 0,
                disposed: false,
            }),
        }
    }

    /// Convenience constructor wrapping a plain async closure.
    pub fn from_fn<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self::new(Box::new(move || Box::pin(producer())))
    }

    /// Fetch (or re-fetch) the resource.
    ///
    /// Callable while a prior call is outstanding; the stale outcome is
    /// discarded at the state-application boundary. A previous `error` is
    /// cleared only once a successful response is applied, and a failure
    /// never erases previously loaded `data`.
    pub async fn refetch(&self) {
        let epoch = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.epoch += 1;
            state.loading = true;
            state.epoch
        };

        tracing::debug!(epoch, "resource fetch issued");
        let outcome = (self.producer)().await;

        let mut state = self.state.lock();
        if state.disposed || epoch != state.epoch {
            tracing::debug!(epoch, latest = state.epoch, "stale outcome discarded");
            return;
        }
        state.loading = false;
        match outcome {
            Ok(value) => {
                state.data = Some(value);
                state.error = None;
            }
            Err(err) => {
                // Keep the last good data; a failed refresh must not blank
                // a working view.
                tracing::debug!(epoch, error = %err, "resource fetch failed");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Tear the resource down: no outcome applied after this, including
    /// ones already in flight. The underlying call is not aborted.
    pub fn dispose(&self) {
        self.state.lock().disposed = true;
    }

    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        let state = self.state.lock();
        ResourceSnapshot {
            data: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
            epoch: state.epoch,
        }
    }

    pub fn data(&self) -> Option<T> {
        self.state.lock().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }
}
