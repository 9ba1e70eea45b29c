//! Helper functions for composing with the crate's value wrappers.
//!
//! - [`identity`] / [`as_is`]: return the argument unchanged
//! - [`discard`] / [`as_unit`]: drop the argument and return `()`
//! - [`make_optional`], [`make_non_optional`], [`as_optional`]: move
//!   functions in and out of [`Optional`]
//! - [`extract_property`], [`pick_properties`]: read keys out of maps
//! - [`log_error`]: report an error through `tracing`

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::hash::Hash;

use crate::control::{NoSuchElementError, Optional};

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use fpkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Synonym of [`identity`].
#[inline]
pub fn as_is<T>(value: T) -> T {
    value
}

/// Consumes the value and returns nothing.
///
/// Useful to turn a value-producing callback into a side-effect one.
///
/// ```
/// use fpkit::compose::discard;
/// use fpkit::control::Either;
///
/// let mut seen = Vec::new();
/// Either::<i32, i32>::left(3).apply(|x| seen.push(*x), |x| discard(x));
/// assert_eq!(seen, vec![3]);
/// ```
#[inline]
pub fn discard<T>(_value: T) {}

/// Synonym of [`discard`].
#[inline]
pub fn as_unit<T>(_value: T) {}

/// Emits `error` at `error` level through `tracing`.
///
/// Nothing is printed unless the application installs a subscriber.
pub fn log_error(error: &dyn Error) {
    match error.source() {
        Some(source) => tracing::error!(%error, %source, "operation failed"),
        None => tracing::error!(%error, "operation failed"),
    }
}

/// Lifts `function` so that it takes an [`Optional`] argument.
///
/// The lifted function fails with [`NoSuchElementError`] when given an empty
/// `Optional`, and never calls `function` in that case.
///
/// # Examples
///
/// ```
/// use fpkit::compose::make_optional;
/// use fpkit::control::Optional;
///
/// let double = make_optional(|x: i32| x * 2);
/// assert_eq!(double(Optional::of(4)), Ok(8));
/// assert!(double(Optional::empty()).is_err());
/// ```
pub fn make_optional<T, R, F>(function: F) -> impl Fn(Optional<T>) -> Result<R, NoSuchElementError>
where
    F: Fn(T) -> R,
{
    move |value| value.into_inner().map(&function)
}

/// Lowers a function over [`Optional`] to one over plain values.
///
/// ```
/// use fpkit::compose::make_non_optional;
/// use fpkit::control::Optional;
///
/// let describe = make_non_optional(|value: Optional<i32>| value.map(|x| x + 1).or_else(0));
/// assert_eq!(describe(1), 2);
/// ```
pub fn make_non_optional<T, R, F>(function: F) -> impl Fn(T) -> R
where
    F: Fn(Optional<T>) -> R,
{
    move |value| function(Optional::of(value))
}

/// Wraps the result of `function` in an [`Optional`].
pub fn as_optional<A, R, F>(function: F) -> impl Fn(A) -> Optional<R>
where
    F: Fn(A) -> R,
{
    move |argument| Optional::of(function(argument))
}

/// Creates a reader for a single key of a map.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fpkit::compose::extract_property;
///
/// let name = extract_property("name");
/// let record = HashMap::from([("name", "ada"), ("role", "admin")]);
/// assert_eq!(name(&record), Some("ada"));
/// assert_eq!(name(&HashMap::new()), None);
/// ```
pub fn extract_property<K, V>(key: K) -> impl Fn(&HashMap<K, V>) -> Option<V>
where
    K: Eq + Hash,
    V: Clone,
{
    move |map| map.get(&key).cloned()
}

/// Creates a projection that keeps only `keys` from a map.
///
/// Keys missing from the input are left out of the result, and repeated keys
/// collapse into one.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fpkit::compose::pick_properties;
///
/// let pick = pick_properties(["id", "name", "id"]);
/// let record = HashMap::from([("id", 1), ("name", 2), ("secret", 3)]);
/// assert_eq!(pick(&record), HashMap::from([("id", 1), ("name", 2)]));
/// ```
pub fn pick_properties<K, V, I>(keys: I) -> impl Fn(&HashMap<K, V>) -> HashMap<K, V>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
    V: Clone,
{
    let keys: HashSet<K> = keys.into_iter().collect();
    move |map| {
        keys.iter()
            .filter_map(|key| map.get_key_value(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
