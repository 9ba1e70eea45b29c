//! Error types for remote data access.
//!
//! Reading from an [`AsyncDatum`](super::AsyncDatum) or
//! [`AsyncData`](super::AsyncData) can fail in a handful of ways, collected
//! in [`RemoteDataError`]. A failed load is surfaced as
//! [`RemoteDataError::Failed`] carrying the stored error unchanged.

use std::error::Error;
use std::fmt;

/// Raised when data is read before any has arrived.
///
/// The error may wrap an inner `NotReadyError` as its [`source`](Error::source):
/// `AsyncData` reports its own message and keeps the underlying datum's error
/// as the cause.
///
/// # Examples
///
/// ```rust
/// use fpkit::remote::{AsyncData, RemoteDataError};
/// use std::error::Error;
///
/// let data: AsyncData<i32, String> = AsyncData::loading();
/// let Err(RemoteDataError::NotReady(error)) = data.value() else { unreachable!() };
/// assert_eq!(error.to_string(), "Trying to access AsyncData before it has data");
/// assert_eq!(
///     error.source().map(|cause| cause.to_string()),
///     Some("Trying to access AsyncDatum before it has data".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotReadyError {
    subject: &'static str,
    cause: Option<Box<NotReadyError>>,
}

impl NotReadyError {
    /// Creates an error for the named container.
    #[inline]
    pub const fn new(subject: &'static str) -> Self {
        Self {
            subject,
            cause: None,
        }
    }

    /// Creates an error for the named container, caused by `cause`.
    #[inline]
    pub fn caused_by(subject: &'static str, cause: Self) -> Self {
        Self {
            subject,
            cause: Some(Box::new(cause)),
        }
    }

    /// The container that was read too early.
    #[inline]
    pub const fn subject(&self) -> &'static str {
        self.subject
    }
}

impl fmt::Display for NotReadyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Trying to access {} before it has data",
            self.subject
        )
    }
}

impl Error for NotReadyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Raised by `AsyncData::update` for an index outside `[0, length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRangeError {
    /// The requested index.
    pub index: isize,
    /// The length of the loaded data.
    pub length: usize,
}

impl fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index < 0 {
            write!(formatter, "Index {} is too small", self.index)
        } else {
            write!(formatter, "Index {} is too large", self.index)
        }
    }
}

impl Error for IndexOutOfRangeError {}

/// Everything that can go wrong when reading remote data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteDataError<E> {
    /// No data has arrived yet (`NotAsked`, or `Loading` without retained data).
    NotReady(NotReadyError),
    /// The load failed; holds the stored error verbatim.
    Failed(E),
    /// A single value was requested but the data holds `length` values.
    NotSingleValued {
        /// The number of values actually held.
        length: usize,
    },
    /// An index fell outside the loaded data.
    IndexOutOfRange(IndexOutOfRangeError),
}

impl<E> RemoteDataError<E> {
    /// Returns the stored load error, if this is a [`RemoteDataError::Failed`].
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns `true` if this is a [`RemoteDataError::NotReady`].
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady(_))
    }
}

impl<E: fmt::Display> fmt::Display for RemoteDataError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady(error) => write!(formatter, "{error}"),
            Self::Failed(error) => write!(formatter, "{error}"),
            Self::NotSingleValued { length } => write!(
                formatter,
                "Expected a single value but the data holds {length} values"
            ),
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl<E> Error for RemoteDataError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotReady(error) => error.source(),
            Self::Failed(error) => error.source(),
            Self::NotSingleValued { .. } | Self::IndexOutOfRange(_) => None,
        }
    }
}

impl<E> From<NotReadyError> for RemoteDataError<E> {
    fn from(error: NotReadyError) -> Self {
        Self::NotReady(error)
    }
}

impl<E> From<IndexOutOfRangeError> for RemoteDataError<E> {
    fn from(error: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(error)
    }
}
