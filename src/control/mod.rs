//! Control structures for functional programming.
//!
//! This module provides the value wrappers the rest of the crate builds on:
//!
//! - [`Optional`]: A value that may be absent, with squashing and
//!   non-reflexive equality for the empty state
//! - [`Either`]: A value that can be one of two types
//! - [`Result`]: An `Either` with success on the left and error on the right
//! - [`Lazy`]: Deferred, memoized asynchronous evaluation (feature `async`)
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```rust
//! use fpkit::control::Optional;
//!
//! let name = Optional::of("fpkit").filter(|name| !name.is_empty());
//! assert_eq!(name.map(str::len).or_else(0), 5);
//! ```
//!
//! ## Branching with Either
//!
//! ```rust
//! use fpkit::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! let next = parsed.proceed_right(|n| {
//!     if n > 0 { Either::right(n * 2) } else { Either::left("not positive".to_string()) }
//! });
//! assert_eq!(next.get_right(), Ok(&84));
//! ```

mod either;
mod error;
#[cfg(feature = "async")]
mod lazy;
mod optional;
mod result;

pub use either::Either;
pub use error::NoSuchElementError;
#[cfg(feature = "async")]
pub use lazy::Lazy;
pub use optional::{IfPresent, IntoOptional, Optional};
pub use result::Result;
