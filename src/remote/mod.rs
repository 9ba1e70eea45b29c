//! Remote data that moves through a load lifecycle.
//!
//! - [`RemoteDataStatus`]: `NotAsked`, `Loading`, `Failed` or `Succeeded`
//! - [`AsyncDatum`]: A single value paired with its status
//! - [`AsyncData`]: A collection of values paired with its status, with
//!   collection operations that respect the lifecycle
//!
//! Reading data that has not arrived is an error, reported through
//! [`RemoteDataError`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::remote::{AsyncData, RemoteDataStatus};
//!
//! let users: AsyncData<&str, String> = AsyncData::not_asked();
//! assert!(users.map(|name| name.len()).is(RemoteDataStatus::NotAsked));
//!
//! let users = users.append(["ada", "grace"]);
//! assert_eq!(users.status(), RemoteDataStatus::Succeeded);
//! assert_eq!(users.find_index(|name| *name == "grace"), Ok(Some(1)));
//! ```

mod data;
mod datum;
mod error;
mod status;

pub use data::AsyncData;
pub use datum::AsyncDatum;
pub use error::{IndexOutOfRangeError, NotReadyError, RemoteDataError};
pub use status::RemoteDataStatus;
