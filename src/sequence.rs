//! Small combinators over lazy sequences.
//!
//! The traversal orders are plain iterators, so most of what callers need already
//! exists on [`Iterator`]. These helpers name the few operations navigation code leans
//! on and add [`SkipUntil`], which resumes a sequence at a known element.

use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Lazily applies `f` to every element of `seq`.
pub fn map_sequence<I, F, U>(seq: I, f: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    seq.into_iter().map(f)
}

/// Lazily keeps the elements of `seq` satisfying `predicate`, in order.
pub fn filter_sequence<I, P>(seq: I, predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate)
}

/// Lazily keeps the elements `narrow` maps to `Some`, yielding the narrowed values.
pub fn narrow_sequence<I, F, U>(seq: I, narrow: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<U>,
{
    seq.into_iter().filter_map(narrow)
}

/// Element at position `n` (0-indexed), consuming no further than it.
#[must_use]
pub fn nth<I: IntoIterator>(seq: I, n: usize) -> Option<I::Item> {
    seq.into_iter().nth(n)
}

/// Discards elements until one equals `target`, then yields it and everything after.
///
/// Rescans linearly from the start of `seq`; trees built from documents are small
/// enough for that to be fine.
#[must_use]
pub fn skip_until<I>(seq: I, target: I::Item) -> SkipUntil<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    SkipUntil {
        inner: seq.into_iter(),
        target: Some(target),
    }
}

/// Iterator returned by [`skip_until`].
pub struct SkipUntil<I: Iterator> {
    inner: I,
    // `None` once the target has been seen.
    target: Option<I::Item>,
}

impl<I> Iterator for SkipUntil<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.target.take() {
            None => self.inner.next(),
            Some(target) => self.inner.by_ref().find(|item| *item == target),
        }
    }
}

impl<I> FusedIterator for SkipUntil<I>
where
    I: FusedIterator,
    I::Item: PartialEq,
{
}

/// Returns the value inside `value`, or a precondition error naming `what` was missing.
///
/// # Errors
///
/// Returns [`Error::Precondition`] when `value` is `None`.
pub fn require<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| Error::precondition(format!("expected {what}, found nothing")))
}

#[cfg(test)]
#[path = "tests/sequence.rs"]
mod tests;
