//! Function composition utilities.
//!
//! # Overview
//!
//! - [`partial!`]: Fix the leading arguments of a function
//! - [`partial_right!`]: Fix the trailing arguments of a function
//!
//! # Helper Functions
//!
//! - [`identity`] and [`as_is`]: Return the argument unchanged
//! - [`discard`] and [`as_unit`]: Drop the argument
//! - [`make_optional`], [`make_non_optional`], [`as_optional`]: Adapt
//!   functions to and from [`Optional`](crate::control::Optional)
//! - [`extract_property`], [`pick_properties`]: Read keys out of maps
//! - [`log_error`]: Report an error through `tracing`
//!
//! # Examples
//!
//! ## Partial Application
//!
//! ```
//! use fpkit::{partial, partial_right};
//!
//! fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
//!
//! // `__` is matched as a literal token; there is nothing to import.
//! let from_ten = partial!(subtract, 10, __);
//! let minus_ten = partial_right!(subtract, __, 10);
//! assert_eq!(from_ten(3), 7);
//! assert_eq!(minus_ten(3), -7);
//! ```
//!
//! ## Picking properties
//!
//! ```
//! use std::collections::HashMap;
//! use fpkit::compose::{extract_property, pick_properties};
//!
//! let records = vec![
//!     HashMap::from([("id", 1), ("score", 10)]),
//!     HashMap::from([("id", 2)]),
//! ];
//! let scores: Vec<_> = records.iter().map(extract_property("score")).collect();
//! assert_eq!(scores, vec![Some(10), None]);
//!
//! let ids: Vec<_> = records.iter().map(pick_properties(["id"])).collect();
//! assert_eq!(ids[1], HashMap::from([("id", 2)]));
//! ```
//!
//! # Laws
//!
//! - **Leading**: `partial!(f, a, __)(b) == f(a, b)`
//! - **Trailing**: `partial_right!(f, __, b)(a) == f(a, b)`
//! - **Thunk**: `partial!(f, a, b)() == f(a, b)`

mod partial_macro;
mod utils;

pub use utils::{
    as_is, as_optional, as_unit, discard, extract_property, identity, log_error,
    make_non_optional, make_optional, pick_properties,
};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::partial;
pub use crate::partial_right;
