//! A single value loaded from a remote source.

use crate::control::{Either, Optional};

use super::{NotReadyError, RemoteDataError, RemoteDataStatus};

/// A single value from a remote source that takes time to load.
///
/// The datum pairs a [`RemoteDataStatus`] with an `Either<E, Optional<D>>`:
/// a failed load keeps its error on the left, loaded data sits on the right,
/// and when neither has arrived the right side holds an empty `Optional`.
/// The two always agree: `Succeeded` holds data, `Failed` holds an error, and
/// `NotAsked`/`Loading` hold nothing unless data was retained by
/// [`load_more`](Self::load_more).
///
/// Instances are only built through the four factories and never change
/// afterwards.
///
/// # Type Parameters
///
/// * `D` - The shape of the requested data
/// * `E` - The shape of errors the request can produce
///
/// # Examples
///
/// ```rust
/// use fpkit::remote::{AsyncDatum, RemoteDataError};
///
/// let pending: AsyncDatum<u32, String> = AsyncDatum::loading();
/// assert!(pending.is_asked());
/// assert!(pending.value().is_err());
///
/// let loaded: AsyncDatum<u32, String> = AsyncDatum::loaded(7);
/// assert_eq!(loaded.value(), Ok(&7));
///
/// let failed: AsyncDatum<u32, String> = AsyncDatum::errored("timeout".to_string());
/// assert_eq!(failed.value(), Err(RemoteDataError::Failed("timeout".to_string())));
/// ```
#[derive(Debug, Clone)]
pub struct AsyncDatum<D, E> {
    status: RemoteDataStatus,
    internal: Either<E, Optional<D>>,
}

impl<D, E> AsyncDatum<D, E> {
    const fn without_data(status: RemoteDataStatus) -> Self {
        Self {
            status,
            internal: Either::Right(Optional::empty()),
        }
    }

    /// The request for data has not been made yet.
    #[inline]
    pub const fn not_asked() -> Self {
        Self::without_data(RemoteDataStatus::NotAsked)
    }

    /// A request is in flight but has not completed.
    #[inline]
    pub const fn loading() -> Self {
        Self::without_data(RemoteDataStatus::Loading)
    }

    /// The request returned `data`.
    ///
    /// Nothing asserts that the request is complete: this factory can be used
    /// repeatedly while data streams in.
    #[inline]
    pub const fn loaded(data: D) -> Self {
        Self {
            status: RemoteDataStatus::Succeeded,
            internal: Either::Right(Optional::of(data)),
        }
    }

    /// The request failed with `error`.
    #[inline]
    pub const fn errored(error: E) -> Self {
        Self {
            status: RemoteDataStatus::Failed,
            internal: Either::Left(error),
        }
    }

    /// A reload that keeps `data` visible while it is in flight.
    pub(crate) const fn reloading(data: D) -> Self {
        Self {
            status: RemoteDataStatus::Loading,
            internal: Either::Right(Optional::of(data)),
        }
    }

    /// The current lifecycle status.
    #[inline]
    pub const fn status(&self) -> RemoteDataStatus {
        self.status
    }

    /// Returns `true` if the current status is `status`.
    #[inline]
    pub fn is(&self, status: RemoteDataStatus) -> bool {
        self.status == status
    }

    /// Returns `true` if retrievable data is held.
    ///
    /// This stays `true` while a [`load_more`](Self::load_more) is in flight.
    #[inline]
    pub fn contains_data(&self) -> bool {
        self.internal.right_ref().is_some_and(Optional::is_present)
    }

    /// Returns `true` once data has been requested.
    #[inline]
    pub fn is_asked(&self) -> bool {
        !self.is(RemoteDataStatus::NotAsked)
    }

    /// Returns `true` while a request is in flight.
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is(RemoteDataStatus::Loading)
    }

    /// Returns `true` once a response (data or error) has arrived.
    #[inline]
    pub const fn is_loaded(&self) -> bool {
        self.status.is_settled()
    }

    /// Returns `true` if the request failed.
    #[inline]
    pub fn is_errored(&self) -> bool {
        self.is(RemoteDataStatus::Failed)
    }

    /// Returns the stored load error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        self.internal.left_ref()
    }

    /// Returns the data, or the reason it cannot be read.
    ///
    /// # Errors
    ///
    /// - [`RemoteDataError::Failed`] with the stored error when the load failed
    /// - [`RemoteDataError::NotReady`] when nothing has arrived yet
    pub fn value(&self) -> Result<&D, RemoteDataError<E>>
    where
        E: Clone,
    {
        match &self.internal {
            Either::Right(data) => data
                .get()
                .map_err(|_| NotReadyError::new("AsyncDatum").into()),
            Either::Left(error) => Err(RemoteDataError::Failed(error.clone())),
        }
    }

    /// Consuming form of [`value`](Self::value).
    ///
    /// # Errors
    ///
    /// Same as [`value`](Self::value).
    pub fn into_value(self) -> Result<D, RemoteDataError<E>> {
        match self.internal {
            Either::Right(data) => data
                .into_inner()
                .map_err(|_| NotReadyError::new("AsyncDatum").into()),
            Either::Left(error) => Err(RemoteDataError::Failed(error)),
        }
    }

    /// The data as an `Optional`; empty unless data is held. Never fails.
    pub fn get_optional(&self) -> Optional<&D> {
        match &self.internal {
            Either::Right(data) => data.as_ref(),
            Either::Left(_) => Optional::empty(),
        }
    }

    /// The data, or `fallback` when none is held.
    pub fn or_else(&self, fallback: D) -> D
    where
        D: Clone,
    {
        self.get_optional().map(Clone::clone).or_else(fallback)
    }

    /// Starts another request.
    ///
    /// Held data is retained while the new request is in flight; otherwise
    /// this is a fresh [`loading`](Self::loading) value.
    pub fn load_more(&self) -> Self
    where
        D: Clone,
    {
        tracing::trace!(from = %self.status, "loading more data");
        match self.get_optional().into_inner() {
            Ok(data) => Self::reloading(data.clone()),
            Err(_) => Self::loading(),
        }
    }
}
