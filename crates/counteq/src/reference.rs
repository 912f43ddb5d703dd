//! Scalar reference scanner.
//!
//! This is the oracle: every other kernel is tested for bit-identical results
//! against [`count`], and it is the performance floor they are measured
//! against.

use crate::CountEq;

/// Count the bytes of `haystack` equal to `target`, one byte at a time.
#[inline]
#[must_use]
pub fn count(haystack: &[u8], target: u8) -> usize {
    let mut count = 0;
    for &byte in haystack {
        if byte == target {
            count += 1;
        }
    }
    count
}

/// The reference scanner as a [`CountEq`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reference;

impl CountEq for Reference {
    fn count(&self, haystack: &[u8], target: u8) -> usize {
        count(haystack, target)
    }
}
