//! Result type - an [`Either`] with the success value on the left.
//!
//! `Result<T, E>` fixes the polarity of an `Either`: the **left** side holds
//! the success value and the **right** side holds the error. Both sides are
//! stored as [`Optional`]s, so a success (or error) that carries no value is
//! still representable.
//!
//! This type is deliberately not named in the crate prelude: a glob import
//! would shadow [`std::result::Result`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Result;
//!
//! let parsed: Result<i32, String> = Result::success(21);
//! let doubled = parsed.map_success(|x| x * 2);
//! assert!(doubled.is_success());
//! assert_eq!(doubled.get_success(), Ok(&42));
//!
//! let failed: Result<i32, String> = Result::error("bad input".to_string());
//! assert_eq!(failed.fold(|_| 0, |_| -1), -1);
//! ```

use std::fmt;

use super::{Either, IntoOptional, NoSuchElementError, Optional};

/// A success-or-error value with success on the left.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Result<T, E> {
    inner: Either<Optional<T>, Optional<E>>,
}

impl<T, E> Result<T, E> {
    /// Creates a success holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            inner: Either::Left(Optional::of(value)),
        }
    }

    /// Creates a success from a nullable or `Optional` value.
    ///
    /// An absent value yields a success that holds nothing.
    #[inline]
    pub fn success_from<V>(value: V) -> Self
    where
        V: IntoOptional<T>,
    {
        Self {
            inner: Either::Left(value.into_optional()),
        }
    }

    /// Creates an error holding `error`.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self {
            inner: Either::Right(Optional::of(error)),
        }
    }

    /// Creates an error from a nullable or `Optional` value.
    #[inline]
    pub fn error_from<V>(error: V) -> Self
    where
        V: IntoOptional<E>,
    {
        Self {
            inner: Either::Right(error.into_optional()),
        }
    }

    /// Returns `true` for a success. Alias of `Either::is_left`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.inner.is_left()
    }

    /// Returns `true` for an error. Alias of `Either::is_right`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.inner.is_right()
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] for an error, or for a success that
    /// holds nothing.
    pub fn get_success(&self) -> std::result::Result<&T, NoSuchElementError> {
        self.inner.get_left()?.get()
    }

    /// Returns the error value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] for a success, or for an error that
    /// holds nothing.
    pub fn get_error(&self) -> std::result::Result<&E, NoSuchElementError> {
        self.inner.get_right()?.get()
    }

    /// Transforms the success value; errors pass through.
    pub fn map_success<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result {
            inner: self.inner.map_left(|success| success.map(function)),
        }
    }

    /// Transforms the error value; successes pass through.
    pub fn map_error<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(E) -> U,
    {
        Result {
            inner: self.inner.map_right(|error| error.map(function)),
        }
    }

    /// Collapses both cases into a single value.
    ///
    /// The functions receive the `Optional` held on their side.
    pub fn fold<U, F, G>(self, success_function: F, error_function: G) -> U
    where
        F: FnOnce(Optional<T>) -> U,
        G: FnOnce(Optional<E>) -> U,
    {
        self.inner.fold(success_function, error_function)
    }

    /// Invokes exactly one handler with the populated side.
    pub fn apply<F, G>(&self, success_handler: F, error_handler: G)
    where
        F: FnOnce(&Optional<T>),
        G: FnOnce(&Optional<E>),
    {
        self.inner.apply(success_handler, error_handler);
    }

    /// Replaces a success with the `Result` produced by `function`.
    pub fn proceed_with_success<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(Optional<T>) -> Result<U, E>,
    {
        Result {
            inner: self.inner.proceed_left(|success| function(success).inner),
        }
    }

    /// Replaces an error with the `Result` produced by `function`.
    pub fn proceeds_with_error<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(Optional<E>) -> Result<T, U>,
    {
        Result {
            inner: self.inner.proceed_right(|error| function(error).inner),
        }
    }

    /// Deferred form of [`proceed_with_success`](Self::proceed_with_success).
    #[cfg(feature = "async")]
    pub async fn proceed_with_success_async<U, F, Fut>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(Optional<T>) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        let inner = self
            .inner
            .proceed_left_async(|success| async move { function(success).await.inner })
            .await;
        Result { inner }
    }

    /// Deferred form of [`proceeds_with_error`](Self::proceeds_with_error).
    #[cfg(feature = "async")]
    pub async fn proceeds_with_error_async<U, F, Fut>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(Optional<E>) -> Fut,
        Fut: Future<Output = Result<T, U>>,
    {
        let inner = self
            .inner
            .proceed_right_async(|error| async move { function(error).await.inner })
            .await;
        Result { inner }
    }

    /// Returns the underlying `Either`.
    #[inline]
    pub fn into_either(self) -> Either<Optional<T>, Optional<E>> {
        self.inner
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_std(self) -> std::result::Result<Optional<T>, Optional<E>> {
        match self.inner {
            Either::Left(success) => Ok(success),
            Either::Right(error) => Err(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::error(error),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Either::Left(success) => formatter.debug_tuple("Success").field(success).finish(),
            Either::Right(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}
