//! NEON kernel for aarch64.

use core::arch::aarch64::{vaddlvq_u8, vceqq_u8, vdupq_n_u8, vld1q_u8, vsubq_u8};

use super::MAX_BATCH;
use crate::zones::Zones;

pub(crate) const NEON_WIDTH: usize = 16;

/// # Safety
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn count_neon(haystack: &[u8], target: u8) -> usize {
    let zones = Zones::split(haystack, NEON_WIDTH, NEON_WIDTH);
    // SAFETY: NEON is guaranteed by the caller.
    zones.count_edges(target) + unsafe { body_neon(zones.body, target) }
}

/// # Safety
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
unsafe fn body_neon(body: &[u8], target: u8) -> usize {
    let (vectors, rest) = body.as_chunks::<NEON_WIDTH>();
    debug_assert!(rest.is_empty());

    let mut total = 0;
    // SAFETY: every chunk is 16 readable bytes.
    unsafe {
        let needle = vdupq_n_u8(target);
        for batch in vectors.chunks(MAX_BATCH) {
            let mut lanes = vdupq_n_u8(0);
            for vector in batch {
                let bytes = vld1q_u8(vector.as_ptr());
                // Matching lanes are 0xff, so subtracting adds one.
                lanes = vsubq_u8(lanes, vceqq_u8(bytes, needle));
            }
            // At most 16 * 255, fits the u16 widening sum.
            total += usize::from(vaddlvq_u8(lanes));
        }
    }
    total
}
