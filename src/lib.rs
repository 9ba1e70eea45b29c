//! # fpkit
//!
//! Functional value wrappers for Rust.
//!
//! ## Overview
//!
//! - **Control Structures**: `Optional` with squashing, `Either`, a
//!   success-on-the-left `Result`, and the memoized asynchronous `Lazy`
//! - **Remote Data**: `AsyncDatum` and `AsyncData`, values tagged with the
//!   lifecycle of the request that produces them
//! - **Function Composition**: `partial!`, `partial_right!` and small
//!   combinators for adapting callbacks
//!
//! ## Feature Flags
//!
//! - `control`: `Optional`, `Either`, `Result`
//! - `async`: `Lazy` and the `_async` combinators (pulls in `futures`)
//! - `remote`: `AsyncDatum`, `AsyncData`
//! - `compose`: Partial application and helper functions
//! - `serde`: `Serialize`/`Deserialize` for the value wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let page: AsyncData<u32, String> = AsyncData::loaded([3, 1, 2]);
//! let largest = page
//!     .get_all_optional()
//!     .flat_map(|values| values.iter().max().copied());
//! assert_eq!(largest.or_else(0), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. [`control::Result`] is left
/// out so that it does not shadow the standard `Result`.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::{Either, IfPresent, IntoOptional, NoSuchElementError, Optional};

    #[cfg(feature = "async")]
    pub use crate::control::Lazy;

    #[cfg(feature = "remote")]
    pub use crate::remote::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "remote")]
pub mod remote;
