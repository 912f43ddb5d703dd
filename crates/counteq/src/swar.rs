//! Portable word-at-a-time kernel ("SIMD within a register").
//!
//! Each `u64` word is compared against the target in all eight byte lanes at
//! once with the zero-byte test from *Bit Twiddling Hacks*, which leaves
//! `0x80` in exactly the lanes that match. The masks of the eight words in a
//! 64-byte block are shifted into disjoint bit positions, OR-ed together and
//! counted with a single popcount.

use crate::zones::Zones;

const WORD: usize = 8;
const BLOCK: usize = 64;
const LANES: u64 = 0x0101_0101_0101_0101;
const LOW_SEVEN: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// Count the bytes of `haystack` equal to `target`, a 64-bit word at a time.
#[must_use]
pub fn count(haystack: &[u8], target: u8) -> usize {
    let zones = Zones::split(haystack, WORD, BLOCK);
    zones.count_edges(target) + count_blocks(zones.body, target)
}

#[inline(always)]
fn broadcast(byte: u8) -> u64 {
    u64::from(byte) * LANES
}

/// High bit set in every byte of `word` equal to the corresponding byte of
/// `needle`, every other bit clear.
#[inline(always)]
fn match_mask(word: u64, needle: u64) -> u64 {
    let diff = word ^ needle;
    // `(diff & 0x7f) + 0x7f` sets the high bit of a lane iff its low seven
    // bits are nonzero and never carries into the next lane.
    !(((diff & LOW_SEVEN) + LOW_SEVEN) | diff | LOW_SEVEN)
}

#[inline(always)]
fn count_block(block: &[u8; BLOCK], needle: u64) -> u32 {
    let (words, _) = block.as_chunks::<WORD>();
    let mut folded = 0;
    for (shift, word) in words.iter().enumerate() {
        folded |= match_mask(u64::from_ne_bytes(*word), needle) >> shift;
    }
    folded.count_ones()
}

fn count_blocks(body: &[u8], target: u8) -> usize {
    let (blocks, rest) = body.as_chunks::<BLOCK>();
    debug_assert!(rest.is_empty());

    let needle = broadcast(target);
    blocks
        .iter()
        .map(|block| count_block(block, needle) as usize)
        .sum()
}
