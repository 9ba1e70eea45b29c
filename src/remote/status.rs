//! The load-lifecycle status of remote data.

use std::fmt;

/// The states an asynchronous request for data can be in.
///
/// ```text
/// NotAsked ──► Loading ──► Succeeded ──(load_more)──► Loading
///                 │                                      │
///                 └────────► Failed ◄────────────────────┘
/// ```
///
/// `NotAsked` and `Loading` are both valid starting states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemoteDataStatus {
    /// No request has been sent yet.
    #[default]
    NotAsked,
    /// A request has been sent, but no response has been received.
    Loading,
    /// A response has been received and it indicated an error.
    Failed,
    /// A response has been received and it was successful.
    Succeeded,
}

#[allow(non_upper_case_globals)]
impl RemoteDataStatus {
    /// Synonym for [`RemoteDataStatus::Failed`].
    #[deprecated(note = "use `RemoteDataStatus::Failed`")]
    pub const Failure: Self = Self::Failed;

    /// Synonym for [`RemoteDataStatus::Succeeded`].
    #[deprecated(note = "use `RemoteDataStatus::Succeeded`")]
    pub const Success: Self = Self::Succeeded;

    /// Returns `true` once a response (success or failure) has arrived.
    #[inline]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Failed | Self::Succeeded)
    }
}

impl fmt::Display for RemoteDataStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotAsked => "not asked",
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Succeeded => "succeeded",
        };
        formatter.write_str(name)
    }
}
