//! Deferred evaluation with memoization.
//!
//! This module provides the `Lazy<T>` type. A `Lazy` wraps a producer that
//! is not run until the value is first requested through
//! [`Lazy::get_value`]. The producer runs exactly once; every later request,
//! including requests that arrive while the first evaluation is still
//! pending, observes that single outcome.
//!
//! The memo slot is a single shared pending computation
//! ([`futures::future::Shared`]), not a lock: a caller that arrives while the
//! evaluation is in flight simply awaits the same future.
//!
//! Failures are values: a producer returning `Result<V, E>` caches its error
//! exactly as it caches a success. If the producer panics, the panic reaches
//! the task that drove the evaluation and every later request panics too.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Lazy;
//! # futures::executor::block_on(async {
//! let lazy = Lazy::create(|| "aa".to_string());
//! let parsed = lazy.chain(|hex| i64::from_str_radix(&hex, 16).unwrap_or(0));
//!
//! assert!(!lazy.is_evaluated());
//! assert_eq!(parsed.get_value().await, 170);
//! assert!(lazy.is_evaluated());
//! # });
//! ```

use std::fmt;

use futures::future::{BoxFuture, FutureExt, Shared};

/// A lazily evaluated, memoized value.
///
/// Cloning a `Lazy` yields a handle onto the same evaluation.
///
/// # Type Parameters
///
/// * `T` - The type of the produced value. It is handed out by clone to each
///   caller, so it must be `Clone`; `Send + Sync` lets the evaluation be
///   awaited from any task.
pub struct Lazy<T> {
    evaluation: Shared<BoxFuture<'static, T>>,
}

impl<T> Lazy<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a lazy value from a synchronous producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Lazy;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// # futures::executor::block_on(async {
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let lazy = Lazy::create(move || {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    ///     42
    /// });
    ///
    /// assert_eq!(calls.load(Ordering::SeqCst), 0);
    /// assert_eq!(lazy.get_value().await, 42);
    /// assert_eq!(lazy.get_value().await, 42);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// # });
    /// ```
    pub fn create<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::create_async(move || futures::future::ready(producer()))
    }

    /// Creates a lazy value from an asynchronous producer.
    ///
    /// `producer` is called on the first poll of the first
    /// [`get_value`](Self::get_value) future, never at construction.
    pub fn create_async<F, Fut>(producer: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let evaluation = async move {
            tracing::trace!(value_type = std::any::type_name::<T>(), "evaluating lazy value");
            producer().await
        }
        .boxed()
        .shared();

        Self { evaluation }
    }

    /// Creates a lazy value that is already evaluated to `value`.
    pub fn of(value: T) -> Self {
        let evaluation = futures::future::ready(value).boxed().shared();
        // Drive the ready future once so `peek` sees the value immediately.
        let _ = evaluation.clone().now_or_never();
        Self { evaluation }
    }

    /// Returns a future resolving to the memoized value.
    ///
    /// The first future to be polled triggers the evaluation; all others wait
    /// for it. The returned future owns its handle and may outlive `self`.
    pub fn get_value(&self) -> impl Future<Output = T> + Send + 'static {
        self.evaluation.clone()
    }

    /// Returns the value if the evaluation has completed.
    pub fn peek(&self) -> Option<T> {
        self.evaluation.peek().cloned()
    }

    /// Returns `true` once the evaluation has completed.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.peek().is_some()
    }

    /// Creates a new lazy value that applies `function` to this one's result.
    ///
    /// Neither cell is evaluated until the returned one is.
    pub fn chain<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let source = self.evaluation.clone();
        Lazy::create_async(move || source.map(function))
    }

    /// Asynchronous form of [`chain`](Self::chain).
    pub fn chain_async<U, F, Fut>(&self, function: F) -> Lazy<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        let source = self.evaluation.clone();
        Lazy::create_async(move || source.then(function))
    }
}

impl<T> Clone for Lazy<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            evaluation: self.evaluation.clone(),
        }
    }
}

impl<T> fmt::Debug for Lazy<T>
where
    T: Clone + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evaluation.peek() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None => formatter.write_str("Lazy(<pending>)"),
        }
    }
}

static_assertions::assert_impl_all!(Lazy<String>: Send, Sync, Clone);
