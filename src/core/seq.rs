//! Purpose: Generic sequence helpers shared by test steps and assertions.
//! Exports: `reverse`, `is_sorted`, `sample`, `pick`, `parse_all`.
//! Role: Pure, stateless transformations over caller-owned slices.
//! Invariants: Read-only inputs are never mutated; callers keep ownership.
//! Invariants: Invalid sample sizes fail with `ErrorKind::Usage`, never panic.

use crate::core::error::{Error, ErrorKind};
use rand::seq::{IndexedRandom, SliceRandom};
use std::str::FromStr;

/// Reverses the slice in place. Empty and singleton slices are no-ops.
pub fn reverse<T>(items: &mut [T]) {
    items.reverse();
}

/// Returns true iff every adjacent pair is non-decreasing under `T`'s
/// total order. Equal neighbours do not break sortedness. Empty and
/// singleton slices are trivially sorted.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Draws `n` elements uniformly at random without replacement.
///
/// The input is copied and Fisher-Yates shuffled; the original slice is
/// untouched and the returned order is unrelated to the input order.
/// `n` greater than `items.len()` is a usage error.
pub fn sample<T: Clone>(items: &[T], n: usize) -> Result<Vec<T>, Error> {
    if n > items.len() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!(
                "sample size {n} exceeds input length {}",
                items.len()
            ))
            .with_hint("Pass n <= items.len()."));
    }
    let mut copy = items.to_vec();
    copy.shuffle(&mut rand::rng());
    copy.truncate(n);
    Ok(copy)
}

/// Picks one element uniformly at random. Empty input is a usage error.
pub fn pick<'a, T>(items: &'a [T]) -> Result<&'a T, Error> {
    items
        .choose(&mut rand::rng())
        .ok_or_else(|| Error::new(ErrorKind::Usage).with_message("cannot pick from an empty slice"))
}

/// Parses every element into `T`, failing on the first element that does
/// not parse.
pub fn parse_all<T, S>(items: &[S]) -> Result<Vec<T>, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    S: AsRef<str>,
{
    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        let value = item.as_ref().parse::<T>().map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message(format!("cannot parse {item:?}", item = item.as_ref()))
                .with_source(err)
        })?;
        parsed.push(value);
    }
    Ok(parsed)
}
