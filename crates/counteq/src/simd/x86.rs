//! SSE2 and AVX2 kernels for x86_64.

use core::arch::x86_64::{
    __m128i, __m256i, _mm_cmpeq_epi8, _mm_load_si128, _mm_sad_epu8, _mm_set1_epi8,
    _mm_setzero_si128, _mm_storeu_si128, _mm_sub_epi8, _mm256_cmpeq_epi8, _mm256_load_si256,
    _mm256_sad_epu8, _mm256_set1_epi8, _mm256_setzero_si256, _mm256_storeu_si256,
    _mm256_sub_epi8,
};

use super::MAX_BATCH;
use crate::zones::Zones;

pub(crate) const SSE2_WIDTH: usize = 16;
pub(crate) const AVX2_WIDTH: usize = 32;

/// # Safety
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn count_sse2(haystack: &[u8], target: u8) -> usize {
    let zones = Zones::split(haystack, SSE2_WIDTH, SSE2_WIDTH);
    // SAFETY: SSE2 is guaranteed by the caller; the body is 16-byte aligned.
    zones.count_edges(target) + unsafe { body_sse2(zones.body, target) }
}

/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn count_avx2(haystack: &[u8], target: u8) -> usize {
    let zones = Zones::split(haystack, AVX2_WIDTH, AVX2_WIDTH);
    // SAFETY: AVX2 is guaranteed by the caller; the body is 32-byte aligned.
    zones.count_edges(target) + unsafe { body_avx2(zones.body, target) }
}

/// # Safety
/// The CPU must support SSE2 and `body` must start on a 16-byte boundary.
#[target_feature(enable = "sse2")]
#[allow(clippy::cast_possible_truncation, clippy::cast_ptr_alignment)]
unsafe fn body_sse2(body: &[u8], target: u8) -> usize {
    let (vectors, rest) = body.as_chunks::<SSE2_WIDTH>();
    debug_assert!(rest.is_empty());
    debug_assert!(vectors.is_empty() || body.as_ptr().cast::<__m128i>().is_aligned());

    let mut total = 0;
    // SAFETY: every chunk is 16 bytes and, since the body is aligned and the
    // chunks are contiguous, starts on a 16-byte boundary.
    unsafe {
        let needle = _mm_set1_epi8(i8::from_ne_bytes([target]));
        let zero = _mm_setzero_si128();
        for batch in vectors.chunks(MAX_BATCH) {
            let mut lanes = zero;
            for vector in batch {
                let bytes = _mm_load_si128(vector.as_ptr().cast::<__m128i>());
                // Matching lanes are 0xff, i.e. -1.
                lanes = _mm_sub_epi8(lanes, _mm_cmpeq_epi8(bytes, needle));
            }
            let mut sums = [0u64; 2];
            _mm_storeu_si128(sums.as_mut_ptr().cast(), _mm_sad_epu8(lanes, zero));
            total += (sums[0] + sums[1]) as usize;
        }
    }
    total
}

/// # Safety
/// The CPU must support AVX2 and `body` must start on a 32-byte boundary.
#[target_feature(enable = "avx2")]
#[allow(clippy::cast_possible_truncation, clippy::cast_ptr_alignment)]
unsafe fn body_avx2(body: &[u8], target: u8) -> usize {
    let (vectors, rest) = body.as_chunks::<AVX2_WIDTH>();
    debug_assert!(rest.is_empty());
    debug_assert!(vectors.is_empty() || body.as_ptr().cast::<__m256i>().is_aligned());

    let mut total = 0;
    // SAFETY: every chunk is 32 bytes and starts on a 32-byte boundary.
    unsafe {
        let needle = _mm256_set1_epi8(i8::from_ne_bytes([target]));
        let zero = _mm256_setzero_si256();
        for batch in vectors.chunks(MAX_BATCH) {
            let mut lanes = zero;
            for vector in batch {
                let bytes = _mm256_load_si256(vector.as_ptr().cast::<__m256i>());
                lanes = _mm256_sub_epi8(lanes, _mm256_cmpeq_epi8(bytes, needle));
            }
            let mut sums = [0u64; 4];
            _mm256_storeu_si256(sums.as_mut_ptr().cast(), _mm256_sad_epu8(lanes, zero));
            total += sums.iter().sum::<u64>() as usize;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    #[test]
    fn sse2_counts_across_a_flush() {
        // More than one batch of vectors, every byte a match.
        let buf = vec![0xa5u8; SSE2_WIDTH * (MAX_BATCH + 3) + 11];
        // SAFETY: SSE2 is part of the x86_64 baseline.
        let count = unsafe { count_sse2(&buf[1..], 0xa5) };
        assert_eq!(count, buf.len() - 1);
    }

    #[test]
    fn avx2_counts_across_a_flush() {
        if !std::is_x86_feature_detected!("avx2") {
            return;
        }
        let buf = vec![0xa5u8; AVX2_WIDTH * (2 * MAX_BATCH + 1) + 5];
        // SAFETY: AVX2 support was checked above.
        let count = unsafe { count_avx2(&buf[3..], 0xa5) };
        assert_eq!(count, buf.len() - 3);
    }

    #[test]
    fn sse2_matches_reference_on_mixed_bytes() {
        let buf: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 251) as u8).collect();
        for target in [0, 1, 7, 0x80, 250, 255] {
            // SAFETY: SSE2 is part of the x86_64 baseline.
            let count = unsafe { count_sse2(&buf[5..4000], target) };
            assert_eq!(count, reference::count(&buf[5..4000], target));
        }
    }
}
