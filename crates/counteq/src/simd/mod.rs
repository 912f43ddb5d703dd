//! Architecture-specific vector kernels.
//!
//! Every kernel follows the same shape: the scalar loop up to the first
//! vector-aligned address, aligned vector loads across the body, the scalar
//! loop over the tail. Per-lane byte counters are flushed to wide totals at
//! least every [`MAX_BATCH`] vectors so they cannot wrap.

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86;

/// Vectors accumulated in byte lanes before a flush; a lane gains at most one
/// per vector and saturates at `u8::MAX`.
#[cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]
pub(crate) const MAX_BATCH: usize = u8::MAX as usize;
