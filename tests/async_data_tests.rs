#![cfg(feature = "remote")]
//! Unit tests for AsyncData<D, E>.
//!
//! Tests cover:
//! - The load lifecycle, including `load_more` keeping data visible
//! - Error reporting from `value` and `single_value`
//! - Lifecycle-aware `map`, `filter`, `reduce` and `remove`
//! - Read-only collection queries and copying updates

use fpkit::remote::{AsyncData, IndexOutOfRangeError, RemoteDataError, RemoteDataStatus};
use rstest::rstest;
use std::cell::Cell;
use std::error::Error;

type Numbers = AsyncData<i32, String>;

fn numbers() -> Numbers {
    AsyncData::loaded([1, 2, 3, 4])
}

// =============================================================================
// Lifecycle
// =============================================================================

#[rstest]
fn load_more_keeps_data_while_loading() {
    let data = AsyncData::<i32, String>::loaded([1, 2, 3]).load_more();
    assert!(data.contains_data());
    assert!(data.is_loading());
    assert_eq!(data.value(), Ok(&[1, 2, 3][..]));
}

#[rstest]
fn load_more_without_data_holds_nothing() {
    let data = Numbers::loading().load_more();
    assert!(!data.contains_data());
    assert!(data.is_loading());
}

#[rstest]
fn append_recovers_from_failure() {
    let data = Numbers::errored("x".to_string()).append([1]);
    assert!(!data.is_errored());
    assert_eq!(data.status(), RemoteDataStatus::Succeeded);
    assert_eq!(data.value(), Ok(&[1][..]));
}

#[rstest]
#[case(Numbers::not_asked())]
#[case(Numbers::loading())]
fn append_starts_from_nothing(#[case] data: Numbers) {
    assert_eq!(data.append([5, 6]).value(), Ok(&[5, 6][..]));
}

#[rstest]
fn append_extends_retained_data() {
    let data = numbers().load_more().append([5]);
    assert_eq!(data.status(), RemoteDataStatus::Succeeded);
    assert_eq!(data.value(), Ok(&[1, 2, 3, 4, 5][..]));
}

#[rstest]
fn collect_builds_loaded_data() {
    let data: Numbers = (1..=3).collect();
    assert!(data.is_loaded());
    assert_eq!(data.value(), Ok(&[1, 2, 3][..]));
}

// =============================================================================
// value
// =============================================================================

#[rstest]
#[case(Numbers::not_asked())]
#[case(Numbers::loading())]
fn value_before_data_wraps_the_datum_error(#[case] data: Numbers) {
    let Err(RemoteDataError::NotReady(error)) = data.value() else {
        panic!("expected a not-ready error");
    };
    assert_eq!(error.to_string(), "Trying to access AsyncData before it has data");
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("Trying to access AsyncDatum before it has data".to_string())
    );
}

#[rstest]
fn value_of_failed_data_is_the_stored_error() {
    let data = Numbers::errored("Testing error".to_string());
    assert_eq!(
        data.value(),
        Err(RemoteDataError::Failed("Testing error".to_string()))
    );
}

#[rstest]
fn single_value_requires_exactly_one_value() {
    let single: Numbers = AsyncData::loaded([9]);
    assert_eq!(single.single_value(), Ok(&9));
    assert_eq!(
        numbers().single_value(),
        Err(RemoteDataError::NotSingleValued { length: 4 })
    );
    assert!(Numbers::loading().single_value().unwrap_err().is_not_ready());
}

#[rstest]
fn is_empty_requires_data() {
    assert_eq!(Numbers::loaded([]).is_empty(), Ok(true));
    assert_eq!(numbers().is_empty(), Ok(false));
    assert!(Numbers::not_asked().is_empty().is_err());
}

#[rstest]
#[case(vec![], true)]
#[case(vec![None], true)]
#[case(vec![Some(1)], false)]
#[case(vec![None, None], false)]
fn is_empty_or_null_treats_single_none_as_empty(
    #[case] values: Vec<Option<i32>>,
    #[case] expected: bool,
) {
    let data: AsyncData<Option<i32>, ()> = AsyncData::loaded(values);
    assert_eq!(data.is_empty_or_null(), Ok(expected));
}

// =============================================================================
// Optional access
// =============================================================================

#[rstest]
fn get_optional_holds_only_a_single_value() {
    let single: Numbers = AsyncData::loaded([3]);
    assert_eq!(single.get_optional().get(), Ok(&&3));
    assert!(numbers().get_optional().is_empty());
    assert!(Numbers::loading().get_optional().is_empty());
}

#[rstest]
fn get_all_optional_holds_every_value() {
    assert_eq!(numbers().get_all_optional().or_else(&[]), &[1, 2, 3, 4]);
    assert!(Numbers::errored("e".to_string()).get_all_optional().is_empty());
}

#[rstest]
fn or_else_variants_fall_back_without_data() {
    assert_eq!(Numbers::not_asked().or_else(vec![0]), vec![0]);
    assert_eq!(numbers().or_else(vec![0]), vec![1, 2, 3, 4]);
    assert_eq!(Numbers::loading().or_else_single(7), 7);
    assert_eq!(AsyncData::<i32, ()>::loaded([8]).or_else_single(7), 8);
}

// =============================================================================
// map / filter / reduce
// =============================================================================

#[rstest]
fn map_transforms_every_value() {
    assert_eq!(numbers().map(|x| 2 * x).value(), Ok(&[2, 4, 6, 8][..]));
}

#[rstest]
fn map_on_not_asked_stays_not_asked_without_calling() {
    let calls = Cell::new(0);
    let mapped = Numbers::not_asked().map(|x| {
        calls.set(calls.get() + 1);
        *x
    });
    assert!(!mapped.is_loading());
    assert!(mapped.is(RemoteDataStatus::NotAsked));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_on_loading_stays_loading() {
    let mapped = Numbers::loading().map(|x| x.to_string());
    assert!(mapped.is_loading());
    assert!(!mapped.contains_data());
}

#[rstest]
fn map_on_failed_carries_the_error() {
    let calls = Cell::new(0);
    let mapped = Numbers::errored("boom".to_string()).map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });
    assert!(mapped.is_errored());
    assert_eq!(mapped.value(), Err(RemoteDataError::Failed("boom".to_string())));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn filter_keeps_matching_values() {
    assert_eq!(numbers().filter(|x| x % 2 == 0).value(), Ok(&[2, 4][..]));
}

#[rstest]
fn reduce_wraps_the_accumulator_in_a_single_value() {
    let total = numbers().reduce(0, |sum, x| sum + x);
    assert_eq!(total.value(), Ok(&[10][..]));
    assert_eq!(total.single_value(), Ok(&10));
}

#[rstest]
fn reduce_of_not_asked_is_not_asked() {
    let total = Numbers::not_asked().reduce(0, |sum, x| sum + x);
    assert_eq!(total.status(), RemoteDataStatus::NotAsked);
}

#[rstest]
fn map_value_reads_the_mapped_values() {
    assert_eq!(numbers().map_value(|x| x + 1), Ok(vec![2, 3, 4, 5]));
    assert!(Numbers::loading().map_value(|x| x + 1).unwrap_err().is_not_ready());
}

// =============================================================================
// remove / update / concat
// =============================================================================

#[rstest]
fn remove_drops_the_index_and_leaves_the_source_intact() {
    let source = vec![1, 2, 3, 4];
    let data: Numbers = AsyncData::loaded(source.clone());
    let removed = data.remove(1);

    assert_eq!(removed.value(), Ok(&[1, 3, 4][..]));
    assert_eq!(data.value(), Ok(&[1, 2, 3, 4][..]));
    assert_eq!(source, vec![1, 2, 3, 4]);
}

#[rstest]
#[case(-1)]
#[case(10)]
fn remove_out_of_range_is_a_no_op(#[case] index: isize) {
    assert_eq!(numbers().remove(index).value(), Ok(&[1, 2, 3, 4][..]));
}

#[rstest]
fn update_replaces_the_value_at_index() {
    let data: Numbers = AsyncData::loaded([1, 2]);
    let updated = data.update(1, 9).unwrap();
    assert_eq!(updated.value(), Ok(&[1, 9][..]));
    assert_eq!(data.value(), Ok(&[1, 2][..]));
}

#[rstest]
#[case(5, "Index 5 is too large")]
#[case(-1, "Index -1 is too small")]
#[case(2, "Index 2 is too large")]
fn update_out_of_range_fails(#[case] index: isize, #[case] message: &str) {
    let data: Numbers = AsyncData::loaded([1, 2]);
    let error = data.update(index, 9).unwrap_err();
    assert_eq!(
        error,
        RemoteDataError::IndexOutOfRange(IndexOutOfRangeError { index, length: 2 })
    );
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn update_keeps_the_loading_status_of_retained_data() {
    let data = numbers().load_more().update(0, 0).unwrap();
    assert!(data.is_loading());
    assert_eq!(data.value(), Ok(&[0, 2, 3, 4][..]));
}

#[rstest]
fn concat_appends_without_touching_the_original() {
    let data = numbers();
    let extended = data.concat([5, 6]).unwrap();
    assert_eq!(extended.value(), Ok(&[1, 2, 3, 4, 5, 6][..]));
    assert_eq!(data.value(), Ok(&[1, 2, 3, 4][..]));
}

#[rstest]
fn concat_requires_data() {
    assert!(Numbers::not_asked().concat([1]).is_err());
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn find_and_find_index_locate_values() {
    let data = numbers();
    assert_eq!(data.find(|x| *x > 2), Some(&3));
    assert_eq!(data.find_index(|x| *x > 2), Ok(Some(2)));
    assert_eq!(data.find_index(|x| *x > 9), Ok(None));
    assert_eq!(Numbers::loading().find(|_| true), None);
}

#[rstest]
fn get_reads_by_index() {
    assert_eq!(numbers().get(0), Ok(Some(&1)));
    assert_eq!(numbers().get(4), Ok(None));
}

#[rstest]
fn sort_returns_a_sorted_copy() {
    let data: Numbers = AsyncData::loaded([3, 1, 2]);
    assert_eq!(data.sort(), Ok(vec![1, 2, 3]));
    assert_eq!(data.sort_by(|a, b| b.cmp(a)), Ok(vec![3, 2, 1]));
    assert_eq!(data.value(), Ok(&[3, 1, 2][..]));
}

#[rstest]
fn all_and_every_agree() {
    let data = numbers();
    assert_eq!(data.all(|x| *x > 0), Ok(true));
    assert_eq!(data.every(|x| *x > 0), Ok(true));
    assert_eq!(data.all(|x| *x > 1), data.every(|x| *x > 1));
}

#[rstest]
fn any_and_some_agree() {
    let data = numbers();
    assert_eq!(data.any(|x| *x == 4), Ok(true));
    assert_eq!(data.some(|x| *x == 5), Ok(false));
}

#[rstest]
fn queries_on_failed_data_surface_the_error() {
    let data = Numbers::errored("offline".to_string());
    assert_eq!(data.every(|_| true), Err(RemoteDataError::Failed("offline".to_string())));
}

#[rstest]
fn iter_walks_held_values() {
    let doubled: Vec<i32> = numbers().iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
    assert_eq!(Numbers::errored("e".to_string()).iter().count(), 0);
}
