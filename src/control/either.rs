//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`, never both and never neither.
//! Neither side carries a built-in meaning: callers decide whether left or
//! right denotes the error or the primary value. [`Result`](super::Result)
//! fixes one such convention.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Either;
//!
//! let left: Either<i32, String> = Either::left(42);
//! let right: Either<i32, String> = Either::right("hello".to_string());
//!
//! assert!(left.is_left());
//! assert_eq!(right.get_right().map(String::as_str), Ok("hello"));
//!
//! // Collapse both cases into a single value
//! let described = right.fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(described, "String: hello");
//! ```

use std::fmt;

use super::NoSuchElementError;

/// A value that can be one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the left value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.get_left(), Ok(&42));
    /// assert!(left.get_right().is_err());
    /// ```
    #[inline]
    pub const fn get_left(&self) -> Result<&L, NoSuchElementError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(NoSuchElementError::new("Either::Left")),
        }
    }

    /// Returns a reference to the right value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if this is a `Left` value.
    #[inline]
    pub const fn get_right(&self) -> Result<&R, NoSuchElementError> {
        match self {
            Self::Left(_) => Err(NoSuchElementError::new("Either::Right")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// A `Right` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions, keeping the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the Either by applying one of two functions and returning
    /// the raw result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::left(1);
    /// assert_eq!(left.fold(|x| x * 2, |x| x * 3), 2);
    ///
    /// let right: Either<i32, i32> = Either::right(1);
    /// assert_eq!(right.fold(|x| x * 2, |x| x * 3), 3);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes exactly one handler with the populated side.
    #[inline]
    pub fn apply<F, G>(&self, left_handler: F, right_handler: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Self::Left(value) => left_handler(value),
            Self::Right(value) => right_handler(value),
        }
    }

    /// Invokes `function` only if this is a `Left` value.
    #[inline]
    pub fn if_left<F>(&self, function: F)
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = self {
            function(value);
        }
    }

    /// Invokes `function` only if this is a `Right` value.
    #[inline]
    pub fn if_right<F>(&self, function: F)
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = self {
            function(value);
        }
    }

    // =========================================================================
    // Proceed Operations
    // =========================================================================

    /// Replaces a `Left` with the `Either` produced by `function`.
    ///
    /// A `Right` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let start: Either<String, i32> = Either::left("test".to_string());
    /// let next = start.proceed_left(|x| Either::left(x + "ing"));
    /// assert_eq!(next.get_left().map(String::as_str), Ok("testing"));
    /// ```
    #[inline]
    pub fn proceed_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Replaces a `Right` with the `Either` produced by `function`.
    ///
    /// A `Left` passes through untouched.
    #[inline]
    pub fn proceed_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Deferred form of [`proceed_left`](Self::proceed_left).
    ///
    /// `function` is called immediately with a `Left` value and the returned
    /// future resolves once the future it produced resolves. A `Right` yields
    /// a future that is already complete.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    /// # futures::executor::block_on(async {
    /// let start: Either<String, i32> = Either::left("test".to_string());
    /// let next = start
    ///     .proceed_left_async(|x| async move { Either::left(x + "ing") })
    ///     .await;
    /// assert_eq!(next.get_left().map(String::as_str), Ok("testing"));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub fn proceed_left_async<T, F, Fut>(
        self,
        function: F,
    ) -> impl Future<Output = Either<T, R>>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<T, R>>,
    {
        match self {
            Self::Left(value) => futures::future::Either::Left(function(value)),
            Self::Right(value) => {
                futures::future::Either::Right(futures::future::ready(Either::Right(value)))
            }
        }
    }

    /// Deferred form of [`proceed_right`](Self::proceed_right).
    #[cfg(feature = "async")]
    pub fn proceed_right_async<T, F, Fut>(
        self,
        function: F,
    ) -> impl Future<Output = Either<L, T>>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, T>>,
    {
        match self {
            Self::Left(value) => {
                futures::future::Either::Left(futures::future::ready(Either::Left(value)))
            }
            Self::Right(value) => futures::future::Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Swap and Conversion
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_get_absent_side_is_no_such_element() {
        let value: Either<i32, String> = Either::left(1);
        assert_eq!(
            value.get_right(),
            Err(NoSuchElementError::new("Either::Right"))
        );
    }

    #[rstest]
    fn test_proceed_on_other_side_is_identity() {
        let calls = Cell::new(0);
        let value: Either<i32, &str> = Either::right("kept");
        let proceeded = value.proceed_left(|x| {
            calls.set(calls.get() + 1);
            Either::<i32, &str>::left(x + 1)
        });
        assert_eq!(proceeded, Either::Right("kept"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
