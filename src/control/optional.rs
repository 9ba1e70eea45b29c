//! Optional type - a value that may or may not be present.
//!
//! This module provides `Optional<T>`, a container holding at most one value.
//! It differs from [`Option`] in three ways that callers rely on:
//!
//! - Squashing: turning an `Optional<Optional<T>>` (or an `Option<T>`) into an
//!   `Optional<T>` removes exactly one level of nesting, and an absent input
//!   collapses to the single empty state.
//! - Equality is not reflexive for the empty state: two empty `Optional`s are
//!   never equal to each other or to anything else.
//! - Serialization writes the contained value directly, and struct fields that
//!   are empty can be omitted altogether.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//!
//! let present = Optional::of(20).map(|x| x + 1);
//! assert_eq!(present.get(), Ok(&21));
//!
//! let squashed = Optional::squash(Optional::of(Optional::of(3)).flatten());
//! assert_eq!(squashed.or_else(0), 3);
//!
//! let empty: Optional<i32> = Optional::from(None);
//! assert!(!empty.is_present());
//! assert!(!empty.equals(&Optional::empty()));
//! ```

use std::fmt;

use super::NoSuchElementError;

/// A container holding at most one value.
///
/// Every transformation returns a new `Optional`; nothing is mutated in
/// place.
///
/// # Equality
///
/// The [`PartialEq`] implementation compares contained values and treats the
/// empty state as unequal to everything, itself included. This mirrors how
/// `f64::NAN` behaves and is the reason `Optional` does not implement [`Eq`].
///
/// ```rust
/// use fpkit::control::Optional;
///
/// assert!(Optional::of(1) == Optional::of(1));
/// assert!(Optional::<i32>::empty() != Optional::empty());
/// ```
#[derive(Clone, Copy)]
pub struct Optional<T> {
    value: Option<T>,
}

/// Conversion into an [`Optional`] that squashes one level of wrapping.
///
/// Implemented for `Optional<T>` (returned unchanged) and `Option<T>`
/// (`None` becomes the empty state). This is what lets [`Optional::squash`]
/// and [`Optional::flat_map`] accept either shape.
pub trait IntoOptional<T> {
    /// Converts `self` into an `Optional<T>`.
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for Optional<T> {
    #[inline]
    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T> IntoOptional<T> for Option<T> {
    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional { value: self }
    }
}

/// Continuation returned by [`Optional::if_present`].
///
/// Exactly one of the consumer passed to `if_present` and the function passed
/// to [`IfPresent::or_else`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfPresent {
    consumed: bool,
}

impl IfPresent {
    /// Runs `function` only when the originating `Optional` was empty.
    #[inline]
    pub fn or_else<F>(self, function: F)
    where
        F: FnOnce(),
    {
        if !self.consumed {
            function();
        }
    }
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Creates an `Optional` holding `value`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an `Optional` from a nullable value; `None` yields the empty state.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    /// Creates an `Optional` from anything that already is one, removing one
    /// level of wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::squash(Optional::of(42)).get(), Ok(&42));
    /// assert!(Optional::squash(None::<i32>).is_empty());
    /// assert!(Optional::squash(Optional::<i32>::empty()).is_empty());
    /// ```
    #[inline]
    pub fn squash<V>(value: V) -> Self
    where
        V: IntoOptional<T>,
    {
        value.into_optional()
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is held.
    ///
    /// Usable as a serde `skip_serializing_if` predicate.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::of(1).get(), Ok(&1));
    /// assert!(Optional::<i32>::empty().get().is_err());
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, NoSuchElementError> {
        self.value
            .as_ref()
            .ok_or(NoSuchElementError::new("Optional"))
    }

    /// Returns the held value, consuming the `Optional`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElementError`] if the `Optional` is empty.
    #[inline]
    pub fn into_inner(self) -> Result<T, NoSuchElementError> {
        self.value.ok_or(NoSuchElementError::new("Optional"))
    }

    /// Borrows the held value as an `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Returns an iterator over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// The function is never invoked on an empty `Optional`. A mapper that
    /// itself produces an `Optional` or an `Option` should go through
    /// [`flat_map`](Self::flat_map) so the result is squashed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::of(1).map(|x| x + 3).get(), Ok(&4));
    /// assert!(Optional::<i32>::empty().map(|x| x + 3).is_empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            value: self.value.map(function),
        }
    }

    /// Applies `function` to the held value and squashes its result by one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let squashed = Optional::of(1).flat_map(|x| Optional::of(x + 3));
    /// assert_eq!(squashed.get(), Ok(&4));
    ///
    /// let nulled = Optional::of(1).flat_map(|_| None::<i32>);
    /// assert!(nulled.is_empty());
    /// ```
    #[inline]
    pub fn flat_map<U, V, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> V,
        V: IntoOptional<U>,
    {
        match self.value {
            Some(value) => function(value).into_optional(),
            None => Optional::empty(),
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Narrows the held value to `S`.
    ///
    /// The result is empty when the `Optional` is empty or the conversion is
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::of(200_i64).cast::<u8>().get(), Ok(&200_u8));
    /// assert!(Optional::of(300_i64).cast::<u8>().is_empty());
    /// ```
    #[inline]
    pub fn cast<S>(self) -> Optional<S>
    where
        S: TryFrom<T>,
    {
        Optional {
            value: self.value.and_then(|value| S::try_from(value).ok()),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the held value or `other`.
    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the held value or the result of `other`.
    ///
    /// `other` runs only when the `Optional` is empty.
    #[inline]
    pub fn or_else_get<F>(self, other: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(other)
    }

    /// Returns the held value, or `None` when empty.
    #[inline]
    pub fn or_nothing(self) -> Option<T> {
        self.value
    }

    /// Synonym of [`or_nothing`](Self::or_nothing).
    #[inline]
    pub fn or_null(self) -> Option<T> {
        self.value
    }

    /// Returns the held value or the error produced by `error_supplier`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when the `Optional` is empty. The supplier
    /// runs only in that case.
    #[inline]
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(error_supplier)
    }

    // =========================================================================
    // Comparison and projection
    // =========================================================================

    /// Compares with `other` using `is_equal`.
    ///
    /// Returns `false` whenever either side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let first = Optional::of((1, "three"));
    /// let second = Optional::of((1, "four"));
    /// assert!(first.equals_by(&second, |a, b| a.0 == b.0));
    /// ```
    pub fn equals_by<F>(&self, other: &Self, is_equal: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match (&self.value, &other.value) {
            (Some(value), Some(other_value)) => is_equal(other_value, value),
            _ => false,
        }
    }

    /// Reads a property of the held value.
    ///
    /// `key` projects the property; it may return an `Option` or `Optional`
    /// for properties that can be missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// struct Account { id: u32, nickname: Option<String> }
    ///
    /// let account = Optional::of(Account { id: 7, nickname: None });
    /// assert_eq!(account.property(|a| Some(a.id)), Some(7));
    /// assert_eq!(account.property_or(|a| a.nickname.clone(), "anon".to_string()), "anon");
    /// ```
    pub fn property<P, V, F>(&self, key: F) -> Option<P>
    where
        F: FnOnce(&T) -> V,
        V: IntoOptional<P>,
    {
        self.as_ref().flat_map(key).or_nothing()
    }

    /// Reads a property of the held value, falling back to `default`.
    pub fn property_or<P, V, F>(&self, key: F, default: P) -> P
    where
        F: FnOnce(&T) -> V,
        V: IntoOptional<P>,
    {
        self.as_ref().flat_map(key).or_else(default)
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Passes the held value to `consumer`.
    ///
    /// The returned [`IfPresent`] runs its `or_else` function only when this
    /// `Optional` was empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let fallback = Cell::new(false);
    /// Optional::of(3)
    ///     .if_present(|value| seen.set(*value))
    ///     .or_else(|| fallback.set(true));
    /// assert_eq!(seen.get(), 3);
    /// assert!(!fallback.get());
    /// ```
    pub fn if_present<F>(&self, consumer: F) -> IfPresent
    where
        F: FnOnce(&T),
    {
        match &self.value {
            Some(value) => {
                consumer(value);
                IfPresent { consumed: true }
            }
            None => IfPresent { consumed: false },
        }
    }
}

impl<T: PartialEq> Optional<T> {
    /// Compares with `other` using `PartialEq`.
    ///
    /// Two empty `Optional`s are not equal.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_by(other, |left, right| left == right)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Optional").field(value).finish(),
            None => formatter.write_str("Optional::empty"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

// =============================================================================
// Serde
// =============================================================================

/// A held value serializes as the value itself, an empty `Optional` as none.
///
/// Pair struct fields with
/// `#[serde(default, skip_serializing_if = "Optional::is_empty")]` so an empty
/// field is left out of the output entirely.
#[cfg(feature = "serde")]
impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
