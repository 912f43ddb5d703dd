//! Count how many bytes of a buffer range equal a target byte.
//!
//! The crate ships a scalar [`reference`] scanner, which defines the
//! semantics, and a set of data-parallel [`Kernel`]s that must agree with it
//! on every input. [`count_eq`] picks the widest kernel the running CPU
//! supports:
//!
//! ```rust
//! let buf = [1, 2, 1, 2, 1];
//! assert_eq!(counteq::count_eq(&buf, 1), 3);
//! assert_eq!(counteq::count_eq_range(&buf, 1, 3, 2), 2);
//! assert!(counteq::try_count_eq_range(&buf, 4, 2, 1).is_err());
//! ```
//!
//! Code that should not care which implementation it runs against is written
//! against the [`CountEq`] trait, implemented by [`Reference`], [`Kernel`] and
//! [`Counter`].
//!
//! # Features
//!
//! - `std` (default): detect CPU features at run time. Without it the kernel
//!   is chosen from the compile-time target features and the crate is
//!   `no_std`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod counter;
mod error;
mod kernel;
mod options;
mod range;
pub mod reference;
mod simd;
pub mod swar;
mod zones;

#[cfg(test)]
mod tests;

pub use counter::{CountEq, Counter};
pub use error::CountError;
pub use kernel::Kernel;
pub use options::{CounterOptions, DEFAULT_MIN_VECTOR_LEN};
pub use range::ByteRange;
pub use reference::Reference;

/// Count the bytes of `haystack` equal to `target` using the detected kernel.
#[must_use]
pub fn count_eq(haystack: &[u8], target: u8) -> usize {
    Kernel::detect().count(haystack, target)
}

/// Count the bytes of `buf[offset..offset + len]` equal to `target`.
///
/// # Panics
///
/// Panics if the range does not lie within `buf`, the same way slice
/// indexing does. Use [`try_count_eq_range`] to get an error instead.
#[must_use]
#[track_caller]
pub fn count_eq_range(buf: &[u8], offset: usize, len: usize, target: u8) -> usize {
    Kernel::detect().count_range(buf, offset, len, target)
}

/// Count the bytes of `buf[offset..offset + len]` equal to `target`, or
/// report why the range is invalid.
///
/// # Errors
///
/// Returns [`CountError::OutOfRange`] if `offset + len` overflows or exceeds
/// `buf.len()`.
pub fn try_count_eq_range(
    buf: &[u8],
    offset: usize,
    len: usize,
    target: u8,
) -> Result<usize, CountError> {
    Kernel::detect().try_count_range(buf, offset, len, target)
}
