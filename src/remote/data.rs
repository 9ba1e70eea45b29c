//! A collection of values loaded from a remote source.

use std::cmp::Ordering;

use crate::control::Optional;

use super::{AsyncDatum, IndexOutOfRangeError, NotReadyError, RemoteDataError, RemoteDataStatus};

/// A collection of values from a remote source that takes time to load.
///
/// `AsyncData` shares the lifecycle of [`AsyncDatum`] and holds a `Vec<D>`.
/// It adds [`load_more`](Self::load_more), which moves loaded data back to
/// `Loading` while keeping the data visible. Because of that, `Loading` does
/// not imply that no data is held: check [`contains_data`](Self::contains_data)
/// together with the status.
///
/// Every operation that looks like a mutation (`update`, `remove`, `concat`,
/// `append`) returns a new `AsyncData` over a new vector.
///
/// # Examples
///
/// ```rust
/// use fpkit::remote::AsyncData;
///
/// let page: AsyncData<u32, String> = AsyncData::loaded([1, 2, 3]);
/// let refreshing = page.load_more();
/// assert!(refreshing.is_loading());
/// assert!(refreshing.contains_data());
///
/// let total = refreshing.reduce(0, |sum, x| sum + x);
/// assert_eq!(total.value(), Ok(&[6][..]));
/// ```
#[derive(Debug, Clone)]
pub struct AsyncData<D, E> {
    internal: AsyncDatum<Vec<D>, E>,
}

impl<D, E> AsyncData<D, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// The request for data has not been made yet.
    #[inline]
    pub const fn not_asked() -> Self {
        Self {
            internal: AsyncDatum::not_asked(),
        }
    }

    /// A request is in flight but has not completed.
    #[inline]
    pub const fn loading() -> Self {
        Self {
            internal: AsyncDatum::loading(),
        }
    }

    /// The request returned `data`.
    ///
    /// The values are collected into a vector owned by the new instance.
    pub fn loaded<I>(data: I) -> Self
    where
        I: IntoIterator<Item = D>,
    {
        Self {
            internal: AsyncDatum::loaded(data.into_iter().collect()),
        }
    }

    /// The request failed with `error`.
    #[inline]
    pub const fn errored(error: E) -> Self {
        Self {
            internal: AsyncDatum::errored(error),
        }
    }

    /// New data under the current data-bearing status.
    fn with_data(status: RemoteDataStatus, data: Vec<D>) -> Self {
        let internal = match status {
            RemoteDataStatus::Loading => AsyncDatum::reloading(data),
            _ => AsyncDatum::loaded(data),
        };
        Self { internal }
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// The current lifecycle status.
    #[inline]
    pub const fn status(&self) -> RemoteDataStatus {
        self.internal.status()
    }

    /// Returns `true` if the current status is `status`.
    #[inline]
    pub fn is(&self, status: RemoteDataStatus) -> bool {
        self.internal.is(status)
    }

    /// Returns `true` if retrievable data is held, including during a
    /// [`load_more`](Self::load_more).
    #[inline]
    pub fn contains_data(&self) -> bool {
        self.internal.contains_data()
    }

    /// Returns `true` once data has been requested.
    #[inline]
    pub fn is_asked(&self) -> bool {
        self.internal.is_asked()
    }

    /// Returns `true` while a request is in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.internal.is_loading()
    }

    /// Returns `true` once a response (data or error) has arrived.
    #[inline]
    pub const fn is_loaded(&self) -> bool {
        self.internal.is_loaded()
    }

    /// Returns `true` if the request failed.
    #[inline]
    pub fn is_errored(&self) -> bool {
        self.internal.is_errored()
    }

    /// Returns the stored load error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        self.internal.error()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts another request, keeping held data visible while it runs.
    ///
    /// Without data this is a fresh [`loading`](Self::loading) value.
    pub fn load_more(&self) -> Self
    where
        D: Clone,
    {
        Self {
            internal: self.internal.load_more(),
        }
    }

    /// Appends `items` to the held data (or to nothing) and marks the result
    /// as loaded.
    ///
    /// This always produces a `Succeeded` value, recovering from `Failed`,
    /// `NotAsked` and `Loading`.
    pub fn append<I>(&self, items: I) -> Self
    where
        D: Clone,
        I: IntoIterator<Item = D>,
    {
        let mut values = self
            .get_all_optional()
            .map(<[D]>::to_vec)
            .or_else_get(Vec::new);
        values.extend(items);
        tracing::trace!(from = %self.status(), length = values.len(), "appending data");
        Self::loaded(values)
    }

    // =========================================================================
    // Optional access
    // =========================================================================

    /// The data as a single value; empty unless exactly one value is held.
    pub fn get_optional(&self) -> Optional<&D> {
        self.get_all_optional().flat_map(|values| match values {
            [single] => Some(single),
            _ => None,
        })
    }

    /// All held values as an `Optional`; empty unless data is held.
    ///
    /// Data retained by [`load_more`](Self::load_more) is returned too.
    pub fn get_all_optional(&self) -> Optional<&[D]> {
        self.internal.get_optional().map(Vec::as_slice)
    }

    /// The held values, or `fallback` when none are held.
    pub fn or_else(&self, fallback: Vec<D>) -> Vec<D>
    where
        D: Clone,
    {
        self.get_all_optional().map(<[D]>::to_vec).or_else(fallback)
    }

    /// The single held value, or `fallback`.
    pub fn or_else_single(&self, fallback: D) -> D
    where
        D: Clone,
    {
        self.get_optional().map(Clone::clone).or_else(fallback)
    }

    /// Iterates over the held values; yields nothing when no data is held.
    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.get_all_optional().or_else(&[]).iter()
    }

    /// The first value matching `predicate`, or `None` when no data is held.
    pub fn find<P>(&self, mut predicate: P) -> Option<&D>
    where
        P: FnMut(&D) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Consumes the data into its values.
    ///
    /// # Errors
    ///
    /// Same as [`value`](Self::value).
    pub fn into_value(self) -> Result<Vec<D>, RemoteDataError<E>> {
        self.internal.into_value().map_err(wrap_not_ready)
    }
}

impl<D, E> AsyncData<D, E>
where
    E: Clone,
{
    // =========================================================================
    // Reading
    // =========================================================================

    /// Returns the held values.
    ///
    /// # Errors
    ///
    /// - [`RemoteDataError::Failed`] with the stored error, unchanged, when
    ///   the load failed
    /// - [`RemoteDataError::NotReady`] otherwise when no data is held; the
    ///   datum-level error is kept as its source
    pub fn value(&self) -> Result<&[D], RemoteDataError<E>> {
        self.internal
            .value()
            .map(Vec::as_slice)
            .map_err(wrap_not_ready)
    }

    /// Returns the only held value.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value), or with
    /// [`RemoteDataError::NotSingleValued`] unless exactly one value is held.
    pub fn single_value(&self) -> Result<&D, RemoteDataError<E>> {
        match self.value()? {
            [single] => Ok(single),
            values => Err(RemoteDataError::NotSingleValued {
                length: values.len(),
            }),
        }
    }

    /// Returns `true` if the loaded data holds no values.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn is_empty(&self) -> Result<bool, RemoteDataError<E>> {
        Ok(self.value()?.is_empty())
    }

    /// The value at `index`, or `None` past the end.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn get(&self, index: usize) -> Result<Option<&D>, RemoteDataError<E>> {
        Ok(self.value()?.get(index))
    }

    /// The position of the first value matching `predicate`.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn find_index<P>(&self, predicate: P) -> Result<Option<usize>, RemoteDataError<E>>
    where
        P: FnMut(&D) -> bool,
    {
        Ok(self.value()?.iter().position(predicate))
    }

    /// Returns `true` if `predicate` holds for every value. Synonym of
    /// [`every`](Self::every).
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn all<P>(&self, predicate: P) -> Result<bool, RemoteDataError<E>>
    where
        P: FnMut(&D) -> bool,
    {
        self.every(predicate)
    }

    /// Returns `true` if `predicate` holds for every value.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn every<P>(&self, predicate: P) -> Result<bool, RemoteDataError<E>>
    where
        P: FnMut(&D) -> bool,
    {
        Ok(self.value()?.iter().all(predicate))
    }

    /// Returns `true` if `predicate` holds for any value. Synonym of
    /// [`some`](Self::some).
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn any<P>(&self, predicate: P) -> Result<bool, RemoteDataError<E>>
    where
        P: FnMut(&D) -> bool,
    {
        self.some(predicate)
    }

    /// Returns `true` if `predicate` holds for any value.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn some<P>(&self, predicate: P) -> Result<bool, RemoteDataError<E>>
    where
        P: FnMut(&D) -> bool,
    {
        Ok(self.value()?.iter().any(predicate))
    }

    // =========================================================================
    // Collection operations
    // =========================================================================

    /// Applies `operation` to the held values under the lifecycle rules.
    ///
    /// `operation` never runs unless data is held. `NotAsked` and `Loading`
    /// without data carry over as such, `Failed` carries its error over, and
    /// otherwise the new values keep the current status.
    fn derive<U, F>(&self, operation: F) -> AsyncData<U, E>
    where
        F: FnOnce(&[D]) -> Vec<U>,
    {
        if let Some(error) = self.error() {
            return AsyncData::errored(error.clone());
        }
        match self.get_all_optional().or_nothing() {
            Some(values) => AsyncData::with_data(self.status(), operation(values)),
            None if self.is_loading() => AsyncData::loading(),
            None => AsyncData::not_asked(),
        }
    }

    /// Transforms every value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::remote::AsyncData;
    ///
    /// let data: AsyncData<i32, String> = AsyncData::loaded([1, 2, 3, 4]);
    /// assert_eq!(data.map(|x| 2 * x).value(), Ok(&[2, 4, 6, 8][..]));
    ///
    /// let pending: AsyncData<i32, String> = AsyncData::loading();
    /// assert!(pending.map(|x| x + 1).is_loading());
    /// ```
    pub fn map<U, F>(&self, function: F) -> AsyncData<U, E>
    where
        F: FnMut(&D) -> U,
    {
        self.derive(|values| values.iter().map(function).collect())
    }

    /// Keeps the values matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        D: Clone,
        P: FnMut(&D) -> bool,
    {
        self.derive(|values| {
            values
                .iter()
                .filter(|value| predicate(value))
                .cloned()
                .collect()
        })
    }

    /// Folds the values into a single accumulator, held as the only value of
    /// the result.
    pub fn reduce<U, F>(&self, initial: U, function: F) -> AsyncData<U, E>
    where
        F: FnMut(U, &D) -> U,
    {
        self.derive(|values| vec![values.iter().fold(initial, function)])
    }

    /// Shorthand for `map(function)` followed by reading the values.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value) when no data is held.
    pub fn map_value<U, F>(&self, function: F) -> Result<Vec<U>, RemoteDataError<E>>
    where
        F: FnMut(&D) -> U,
    {
        self.map(function).into_value()
    }

    /// Drops the value at `index`; out-of-range indices leave the data as is.
    pub fn remove(&self, index: isize) -> Self
    where
        D: Clone,
    {
        let target = usize::try_from(index).ok();
        self.derive(|values| {
            values
                .iter()
                .enumerate()
                .filter(|&(position, _)| Some(position) != target)
                .map(|(_, value)| value.clone())
                .collect()
        })
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value), or with
    /// [`RemoteDataError::IndexOutOfRange`] when `index` is outside
    /// `[0, length)`.
    pub fn update(&self, index: isize, value: D) -> Result<Self, RemoteDataError<E>>
    where
        D: Clone,
    {
        let values = self.value()?;
        let length = values.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < length)
            .ok_or(IndexOutOfRangeError { index, length })?;

        let mut updated = values.to_vec();
        updated[position] = value;
        Ok(Self::with_data(self.status(), updated))
    }

    /// Appends `items` after the held values, keeping the current status.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn concat<I>(&self, items: I) -> Result<Self, RemoteDataError<E>>
    where
        D: Clone,
        I: IntoIterator<Item = D>,
    {
        let mut values = self.value()?.to_vec();
        values.extend(items);
        Ok(Self::with_data(self.status(), values))
    }

    /// A sorted copy of the held values.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn sort(&self) -> Result<Vec<D>, RemoteDataError<E>>
    where
        D: Clone + Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// A copy of the held values sorted with `compare`.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn sort_by<F>(&self, compare: F) -> Result<Vec<D>, RemoteDataError<E>>
    where
        D: Clone,
        F: FnMut(&D, &D) -> Ordering,
    {
        let mut values = self.value()?.to_vec();
        values.sort_by(compare);
        Ok(values)
    }
}

impl<T, E> AsyncData<Option<T>, E>
where
    E: Clone,
{
    /// Like [`is_empty`](Self::is_empty), but a single `None` also counts as
    /// empty.
    ///
    /// # Errors
    ///
    /// Fails like [`value`](Self::value).
    pub fn is_empty_or_null(&self) -> Result<bool, RemoteDataError<E>> {
        Ok(matches!(self.value()?, [] | [None]))
    }
}

impl<D, E> Default for AsyncData<D, E> {
    fn default() -> Self {
        Self::not_asked()
    }
}

impl<D, E> FromIterator<D> for AsyncData<D, E> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::loaded(iter)
    }
}

fn wrap_not_ready<E>(error: RemoteDataError<E>) -> RemoteDataError<E> {
    match error {
        RemoteDataError::NotReady(cause) => {
            NotReadyError::caused_by("AsyncData", cause).into()
        }
        other => other,
    }
}
