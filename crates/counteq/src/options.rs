use crate::Kernel;

/// Ranges shorter than this are counted with the scalar loop by default.
pub const DEFAULT_MIN_VECTOR_LEN: usize = 64;

/// Configuration for a [`Counter`](crate::Counter).
///
/// # Examples
///
/// ```rust
/// use counteq::{CountEq, Counter, CounterOptions, Kernel};
///
/// let counter = Counter::new(CounterOptions {
///     kernel: Some(Kernel::Swar),
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(counter.count(b"banana", b'a'), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterOptions {
    /// Kernel to run. `None` picks the widest kernel the CPU supports.
    ///
    /// # Default
    ///
    /// `None`
    pub kernel: Option<Kernel>,

    /// Ranges shorter than this many bytes skip the vector kernel and use the
    /// scalar loop, which wins when there is less than a few vectors of work.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MIN_VECTOR_LEN`]
    pub min_vector_len: usize,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            kernel: None,
            min_vector_len: DEFAULT_MIN_VECTOR_LEN,
        }
    }
}
