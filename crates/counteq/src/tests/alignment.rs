use super::implementations;
use crate::reference;

/// Every start offset within one AVX2 vector, against lengths around the
/// vector, block and batch boundaries.
#[test]
fn offsets_and_lengths_around_chunk_boundaries() {
    let buf: Vec<u8> = (0..9000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 27) as u8).collect();
    let lengths = [
        0, 1, 2, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 128, 129, 511, 512, 513,
        4080, 4096, 8160, 8200,
    ];
    let impls = implementations();

    for offset in 0..64 {
        for &len in &lengths {
            let range = &buf[offset..offset + len];
            for target in [0u8, 3, 17, 31] {
                let expected = reference::count(range, target);
                for (name, imp) in &impls {
                    assert_eq!(
                        imp.count(range, target),
                        expected,
                        "{name}: offset {offset}, len {len}, target {target}"
                    );
                }
            }
        }
    }
}

/// Byte accumulators saturate after 255 all-matching vectors; ranges long
/// enough to need several flushes must still count exactly.
#[test]
fn all_matching_ranges_span_several_flushes() {
    let len = 32 * 255 * 3 + 77;
    let buf = vec![0xffu8; len + 64];
    for (name, imp) in implementations() {
        for offset in [0, 1, 31, 33] {
            assert_eq!(imp.count(&buf[offset..offset + len], 0xff), len, "{name}");
        }
    }
}

/// Buffers whose bytes differ from the target only in the lane sign bit or
/// the lowest bit.
#[test]
fn near_miss_bytes_are_not_counted() {
    for target in [0x00u8, 0x01, 0x7f, 0x80, 0xfe, 0xff] {
        let decoys = [target ^ 0x80, target ^ 0x01, target ^ 0x7f];
        let mut buf: Vec<u8> = decoys.iter().copied().cycle().take(777).collect();
        buf[100] = target;
        buf[600] = target;
        for (name, imp) in implementations() {
            assert_eq!(imp.count(&buf, target), 2, "{name}, target {target:#04x}");
        }
    }
}
