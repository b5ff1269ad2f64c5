//! Purpose: Random test-data generation for names, identifiers, and credentials.
//! Exports: `alphabetic`, `numeric`, `number`, `password`.
//! Role: Thin generators over the process RNG; no state held between calls.
//! Invariants: Generated strings are ASCII so fixtures stay portable.
//! Invariants: `password` always contains an uppercase letter, a digit, and punctuation.

use crate::core::error::{Error, ErrorKind};
use rand::Rng;
use rand::seq::SliceRandom;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCT: &[u8] = b"!\"#$%&'()*+,-.";

/// Random ASCII-letter string of the given length.
pub fn alphabetic(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let set = if rng.random_bool(0.5) { LOWER } else { UPPER };
            set[rng.random_range(0..set.len())] as char
        })
        .collect()
}

/// Random ASCII-digit string of the given length.
pub fn numeric(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| DIGITS[rng.random_range(0..DIGITS.len())] as char)
        .collect()
}

/// Uniform integer in `0..bound`. A zero bound is a usage error.
pub fn number(bound: u32) -> Result<u32, Error> {
    if bound == 0 {
        return Err(Error::new(ErrorKind::Usage).with_message("random bound must be positive"));
    }
    Ok(rand::rng().random_range(0..bound))
}

/// Random password of the given length with at least one uppercase letter,
/// one digit, and one punctuation character; the rest are lowercase
/// letters. Character positions are shuffled. Lengths below 4 cannot
/// satisfy the composition and are a usage error.
pub fn password(len: usize) -> Result<String, Error> {
    if len < 4 {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("password length {len} is below the minimum of 4")));
    }
    let mut rng = rand::rng();
    let mut chars = Vec::with_capacity(len);
    chars.push(UPPER[rng.random_range(0..UPPER.len())]);
    chars.push(DIGITS[rng.random_range(0..DIGITS.len())]);
    chars.push(PUNCT[rng.random_range(0..PUNCT.len())]);
    while chars.len() < len {
        let set = if rng.random_bool(0.7) { LOWER } else { DIGITS };
        chars.push(set[rng.random_range(0..set.len())]);
    }
    chars.shuffle(&mut rng);
    Ok(chars.iter().map(|byte| *byte as char).collect())
}
