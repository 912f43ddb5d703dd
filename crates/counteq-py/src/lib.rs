//! Python module `counteq`.
//!
//! `bytes` arguments are borrowed for the duration of the call, never
//! copied, and the GIL is released while counting.

use ::counteq::{CountEq, CountError, Counter, CounterOptions, Kernel, reference};
use pyo3::{exceptions::PyValueError, prelude::*};

fn value_error(err: CountError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn counter_for(kernel: Option<&str>) -> Result<Counter, CountError> {
    let kernel = kernel.map(str::parse::<Kernel>).transpose()?;
    Counter::new(CounterOptions {
        kernel,
        ..Default::default()
    })
}

/// Count the bytes of `buf[offset:offset + length]` equal to `target`.
///
/// Raises `ValueError` if the range does not lie within `buf` or `kernel`
/// names a kernel that is unknown or unsupported on this CPU.
#[pyfunction]
#[pyo3(signature = (buf, offset, length, target, kernel = None))]
pub fn count_eq(
    py: Python<'_>,
    buf: &[u8],
    offset: usize,
    length: usize,
    target: u8,
    kernel: Option<String>,
) -> PyResult<usize> {
    let counter = counter_for(kernel.as_deref()).map_err(value_error)?;
    py.allow_threads(|| counter.try_count_range(buf, offset, length, target))
        .map_err(value_error)
}

/// Count with the scalar reference loop.
#[pyfunction]
pub fn count_eq_baseline(
    py: Python<'_>,
    buf: &[u8],
    offset: usize,
    length: usize,
    target: u8,
) -> PyResult<usize> {
    py.allow_threads(|| reference::Reference.try_count_range(buf, offset, length, target))
        .map_err(value_error)
}

/// Names of the kernels this CPU can run, narrowest first.
#[pyfunction]
pub fn available_kernels() -> Vec<&'static str> {
    Kernel::available().map(Kernel::name).collect()
}

/// Registers the byte counting functions on the `counteq` module.
#[pymodule]
pub fn counteq(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(count_eq, m)?)?;
    m.add_function(wrap_pyfunction!(count_eq_baseline, m)?)?;
    m.add_function(wrap_pyfunction!(available_kernels, m)?)?;
    m.add("detected_kernel", Kernel::detect().name())?;
    Ok(())
}
