//! Deferred view loading with cache-once semantics.
//!
//! A [`LazyView`] holds the async thunk behind a deferred route entry. The
//! first activation runs the thunk; every later activation observes the
//! cached outcome, success or failure, without running it again. Overlapping
//! activations share the single in-flight load.

use std::cell::OnceCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use thiserror::Error;

/// A deferred view's loader rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("deferred view failed to load: {reason}")]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

type LoadFuture<V> = Shared<LocalBoxFuture<'static, Result<V, LoadError>>>;

/// A cached deferred view binding. Cloning shares the cache.
#[derive(Clone)]
pub struct LazyView<V: Clone + 'static> {
    inner: Rc<Inner<V>>,
}

struct Inner<V: Clone + 'static> {
    loader: Box<dyn Fn() -> LocalBoxFuture<'static, Result<V, LoadError>>>,
    in_flight: OnceCell<LoadFuture<V>>,
    done: OnceCell<Result<V, LoadError>>,
}

impl<V: Clone + 'static> LazyView<V> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, LoadError>> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                loader: Box::new(move || Box::pin(loader())),
                in_flight: OnceCell::new(),
                done: OnceCell::new(),
            }),
        }
    }

    /// Resolves the view, running the loader on the first call only.
    pub async fn load(&self) -> Result<V, LoadError> {
        if let Some(done) = self.inner.done.get() {
            return done.clone();
        }
        let fut = self
            .inner
            .in_flight
            .get_or_init(|| {
                log::debug!("starting deferred view load");
                (self.inner.loader)().shared()
            })
            .clone();
        let result = fut.await;
        if self.inner.done.set(result.clone()).is_ok() {
            if let Err(err) = &result {
                log::warn!("deferred view load failed: {err}");
            }
        }
        result
    }

    /// The cached view, if a load already succeeded.
    pub fn peek(&self) -> Option<V> {
        self.inner.done.get().and_then(|r| r.as_ref().ok()).cloned()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.inner.done.get(), Some(Ok(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn counting(
        outcome: Result<&'static str, LoadError>,
    ) -> (LazyView<&'static str>, Rc<Cell<u32>>) {
        let runs = Rc::new(Cell::new(0));
        let runs_in_loader = Rc::clone(&runs);
        let lazy = LazyView::new(move || {
            runs_in_loader.set(runs_in_loader.get() + 1);
            let outcome = outcome.clone();
            async move { outcome }
        });
        (lazy, runs)
    }

    #[test]
    fn loads_exactly_once() {
        let (lazy, runs) = counting(Ok("about"));
        assert!(!lazy.is_loaded());
        assert_eq!(block_on(lazy.load()), Ok("about"));
        assert_eq!(block_on(lazy.load()), Ok("about"));
        assert_eq!(runs.get(), 1);
        assert!(lazy.is_loaded());
    }

    #[test]
    fn clones_share_the_cache() {
        let (lazy, runs) = counting(Ok("about"));
        let twin = lazy.clone();
        assert_eq!(block_on(lazy.load()), Ok("about"));
        assert_eq!(block_on(twin.load()), Ok("about"));
        assert_eq!(runs.get(), 1);
        assert_eq!(twin.peek(), Some("about"));
    }

    #[test]
    fn failure_is_cached_without_retry() {
        let (lazy, runs) = counting(Err(LoadError::new("network error")));
        let first = block_on(lazy.load());
        let second = block_on(lazy.load());
        assert_eq!(first, Err(LoadError::new("network error")));
        assert_eq!(first, second);
        assert_eq!(runs.get(), 1);
        assert!(!lazy.is_loaded());
        assert_eq!(lazy.peek(), None);
    }

    #[test]
    fn peek_is_empty_until_loaded() {
        let (lazy, _runs) = counting(Ok("about"));
        assert_eq!(lazy.peek(), None);
        let _ = block_on(lazy.load());
        assert_eq!(lazy.peek(), Some("about"));
    }
}
