// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random derangements of a sequence.
//!
//! A derangement is a permutation in which no element remains at its original position. The
//! generator walks the sequence backwards and swaps every position `i` with a position drawn
//! uniformly from `0..i`, never from `0..=i`. Excluding `i` itself is what guarantees that no
//! element ends up where it started (this is Sattolo's algorithm, which always yields a single
//! cycle).
//!
//! Randomness is supplied by the caller, so a seeded generator gives reproducible results:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use trekking_core::derange;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let names = ["anna", "bram", "cees"];
//! let deranged = derange(&names, &mut rng).unwrap();
//!
//! for (before, after) in names.iter().zip(deranged.iter()) {
//!     assert_ne!(before, after);
//! }
//! ```
use rand::Rng;
use thiserror::Error;

/// Returns a derangement of `items`.
///
/// The result is a permutation of `items` where `result[i]` is never the element that was at
/// index `i` in the input. For an empty input an empty vector is returned. A single item can't
/// be deranged and results in [`DerangeError::TooFewItems`].
///
/// Elements are compared by position, not by value: if the input contains equal values at
/// different indices, an equal value may land on an index which previously held one of its
/// duplicates.
pub fn derange<T, R>(items: &[T], rng: &mut R) -> Result<Vec<T>, DerangeError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if items.len() == 1 {
        return Err(DerangeError::TooFewItems(items.len()));
    }

    let mut deranged = items.to_vec();
    for i in (1..deranged.len()).rev() {
        let j = rng.random_range(0..i);
        deranged.swap(i, j);
    }

    Ok(deranged)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerangeError {
    /// No derangement exists for a sequence of this length.
    #[error("can't derange a sequence of {0} item(s)")]
    TooFewItems(usize),
}
