#![cfg(feature = "remote")]
//! Property-based tests for AsyncData.
//!
//! - **Status agreement**: `Succeeded` holds data and `Failed` holds an error
//! - **Retention**: `load_more` keeps held data visible
//! - **Short-circuit**: collection operations on unready data keep the status
//! - **Copying updates**: `remove`, `update` and `concat` leave the source intact

use fpkit::remote::{AsyncData, RemoteDataStatus};
use proptest::prelude::*;

type Data = AsyncData<i32, String>;

fn data_strategy() -> impl Strategy<Value = Data> {
    prop_oneof![
        Just(Data::not_asked()),
        Just(Data::loading()),
        prop::collection::vec(any::<i32>(), 0..16).prop_map(Data::loaded),
        prop::collection::vec(any::<i32>(), 0..16).prop_map(|values| Data::loaded(values).load_more()),
        "[a-z]{1,8}".prop_map(Data::errored),
    ]
}

proptest! {
    /// Data is present exactly for Succeeded, or Loading after load_more
    #[test]
    fn prop_status_agrees_with_contents(data in data_strategy()) {
        match data.status() {
            RemoteDataStatus::Succeeded => {
                prop_assert!(data.contains_data());
            }
            RemoteDataStatus::Failed => {
                prop_assert!(!data.contains_data());
                prop_assert!(data.error().is_some());
            }
            RemoteDataStatus::NotAsked => {
                prop_assert!(!data.contains_data());
            }
            RemoteDataStatus::Loading => {
                prop_assert!(data.error().is_none());
            }
        }
    }

    /// load_more always yields Loading and keeps whatever data was held
    #[test]
    fn prop_load_more_retains_data(data in data_strategy()) {
        let next = data.load_more();
        prop_assert!(next.is_loading());
        prop_assert_eq!(next.contains_data(), data.contains_data());
        prop_assert_eq!(next.or_else(vec![]), data.or_else(vec![]));
    }

    /// map keeps the status and the length
    #[test]
    fn prop_map_preserves_status_and_length(data in data_strategy()) {
        let mapped = data.map(|x| x.wrapping_mul(2));
        prop_assert_eq!(mapped.status(), data.status());
        prop_assert_eq!(mapped.iter().count(), data.iter().count());
    }

    /// filter never grows the data and keeps only accepted values
    #[test]
    fn prop_filter_keeps_accepted_values(data in data_strategy()) {
        let filtered = data.filter(|x| x % 2 == 0);
        prop_assert_eq!(filtered.status(), data.status());
        prop_assert!(filtered.iter().all(|x| x % 2 == 0));
        prop_assert!(filtered.iter().count() <= data.iter().count());
    }

    /// reduce yields exactly one value whenever data is held
    #[test]
    fn prop_reduce_is_single_valued(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let data = Data::loaded(values.clone());
        let total = data.reduce(0_i64, |sum, x| sum + i64::from(*x));
        let expected: i64 = values.iter().map(|x| i64::from(*x)).sum();
        prop_assert_eq!(total.single_value(), Ok(&expected));
    }

    /// remove drops one value for valid indices and leaves the source intact
    #[test]
    fn prop_remove_copies(values in prop::collection::vec(any::<i32>(), 1..16), index in 0_usize..16) {
        let data = Data::loaded(values.clone());
        let removed = data.remove(isize::try_from(index).unwrap());

        let expected_length = if index < values.len() { values.len() - 1 } else { values.len() };
        prop_assert_eq!(removed.iter().count(), expected_length);
        prop_assert_eq!(data.or_else(vec![]), values);
    }

    /// update succeeds exactly for indices in [0, length)
    #[test]
    fn prop_update_checks_range(values in prop::collection::vec(any::<i32>(), 0..8), index in -4_isize..12) {
        let data = Data::loaded(values.clone());
        let in_range = usize::try_from(index).is_ok_and(|position| position < values.len());
        let result = data.update(index, 0);
        prop_assert_eq!(result.is_ok(), in_range);
        prop_assert_eq!(data.or_else(vec![]), values);
    }

    /// append always recovers to Succeeded with the items at the end
    #[test]
    fn prop_append_recovers(data in data_strategy(), items in prop::collection::vec(any::<i32>(), 0..4)) {
        let appended = data.append(items.clone());
        prop_assert_eq!(appended.status(), RemoteDataStatus::Succeeded);
        let values = appended.or_else(vec![]);
        prop_assert!(values.ends_with(&items));
    }
}
