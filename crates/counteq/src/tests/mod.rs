mod alignment;

use crate::{CountEq, Counter, CounterOptions, Kernel};

/// Every implementation the running CPU can execute, labelled for failure
/// messages. Counters are included with the scalar cut-over disabled so the
/// vector path sees short ranges too.
pub(crate) fn implementations() -> Vec<(String, Box<dyn CountEq>)> {
    let mut impls: Vec<(String, Box<dyn CountEq>)> = Vec::new();
    for kernel in Kernel::available() {
        impls.push((kernel.to_string(), Box::new(kernel)));
        let counter = Counter::new(CounterOptions {
            kernel: Some(kernel),
            min_vector_len: 0,
        })
        .unwrap();
        impls.push((format!("counter({kernel})"), Box::new(counter)));
    }
    impls.push(("counter(default)".into(), Box::new(Counter::default())));
    impls
}

pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}
