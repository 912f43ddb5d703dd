#![no_main]
use arbitrary::Arbitrary;
use counteq::{CountEq, Counter, CounterOptions, Kernel, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    offset: usize,
    len: usize,
    target: u8,
    min_vector_len: u8,
    buf: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input {
        offset,
        len,
        target,
        min_vector_len,
        buf,
    } = input;

    // Out-of-range requests must be rejected, never answered.
    let Some(expected) = buf
        .get(offset..offset.saturating_add(len))
        .map(|range| reference::count(range, target))
    else {
        assert!(Kernel::Scalar.try_count_range(&buf, offset, len, target).is_err());
        assert!(Counter::default().try_count_range(&buf, offset, len, target).is_err());
        return;
    };

    for kernel in Kernel::available() {
        assert_eq!(
            kernel.try_count_range(&buf, offset, len, target),
            Ok(expected),
            "{kernel}"
        );
        let counter = Counter::new(CounterOptions {
            kernel: Some(kernel),
            min_vector_len: usize::from(min_vector_len),
        })
        .unwrap();
        assert_eq!(
            counter.count_range(&buf, offset, len, target),
            expected,
            "counter({kernel})"
        );
    }
});
