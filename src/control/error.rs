//! Error types for the control structures.
//!
//! This module provides the error raised when a value is requested from a
//! container that does not hold one.

use std::fmt;

/// Represents an attempt to read a value that is not there.
///
/// Returned by [`Optional::get`](super::Optional::get) on an empty
/// `Optional`, and by [`Either::get_left`](super::Either::get_left) /
/// [`Either::get_right`](super::Either::get_right) when the other side is
/// populated.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{NoSuchElementError, Optional};
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.get(), Err(NoSuchElementError::new("Optional")));
/// assert_eq!(
///     format!("{}", NoSuchElementError::new("Optional")),
///     "Optional: no such element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoSuchElementError {
    container: &'static str,
}

impl NoSuchElementError {
    /// Creates an error for the named container (`"Optional"`, `"Either::Left"`, ...).
    #[inline]
    pub const fn new(container: &'static str) -> Self {
        Self { container }
    }

    /// The container that was found empty.
    #[inline]
    pub const fn container(&self) -> &'static str {
        self.container
    }
}

impl fmt::Display for NoSuchElementError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: no such element", self.container)
    }
}

impl std::error::Error for NoSuchElementError {}
