use super::{filter_sequence, map_sequence, narrow_sequence, nth, require, skip_until};
use crate::error::Error;

#[test]
fn test_map_and_filter_are_lazy() {
    let mut calls = 0;
    let mut doubled = map_sequence(1..=100, |x| {
        calls += 1;
        x * 2
    });
    assert_eq!(doubled.next(), Some(2));
    assert_eq!(doubled.next(), Some(4));
    drop(doubled);
    assert_eq!(calls, 2);

    let evens: Vec<i32> = filter_sequence(1..=10, |x| x % 2 == 0).collect();
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_narrow_sequence() {
    let words = ["1", "two", "3", "four"];
    let numbers: Vec<u32> = narrow_sequence(words, |w| w.parse().ok()).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn test_nth() {
    assert_eq!(nth(["a", "b", "c"], 0), Some("a"));
    assert_eq!(nth(["a", "b", "c"], 2), Some("c"));
    assert_eq!(nth(["a", "b", "c"], 3), None);
    assert_eq!(nth(std::iter::empty::<u8>(), 0), None);
}

#[test]
fn test_nth_stops_at_target() {
    let mut source = 0..;
    assert_eq!(nth(source.by_ref(), 4), Some(4));
    assert_eq!(source.next(), Some(5));
}

#[test]
fn test_skip_until() {
    let rest: Vec<i32> = skip_until(vec![5, 3, 8, 3, 1], 8).collect();
    assert_eq!(rest, vec![8, 3, 1]);

    let first: Vec<i32> = skip_until(vec![3, 1], 3).collect();
    assert_eq!(first, vec![3, 1]);

    // Only the first occurrence matters.
    let repeated: Vec<i32> = skip_until(vec![1, 3, 2, 3], 3).collect();
    assert_eq!(repeated, vec![3, 2, 3]);
}

#[test]
fn test_skip_until_missing_target() {
    let mut rest = skip_until(vec![1, 2, 3], 9);
    assert_eq!(rest.next(), None);
    assert_eq!(rest.next(), None);
}

#[test]
fn test_require() {
    assert_eq!(require(Some(7), "a number").unwrap(), 7);

    let err = require::<u8>(None, "an active document").unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
    assert!(err.to_string().contains("an active document"));
}
