use crate::{ByteRange, CountError, CounterOptions, Kernel, reference};

/// Anything that can count the bytes equal to a target.
///
/// Implementations must agree with [`reference::count`] on every input, so
/// callers (tests and benchmarks included) can be written once against this
/// trait and run against any of them.
pub trait CountEq {
    /// Count the bytes of `haystack` equal to `target`.
    fn count(&self, haystack: &[u8], target: u8) -> usize;

    /// Count the bytes of `buf[offset..offset + len]` equal to `target`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie within `buf`.
    #[track_caller]
    fn count_range(&self, buf: &[u8], offset: usize, len: usize, target: u8) -> usize {
        match self.try_count_range(buf, offset, len, target) {
            Ok(count) => count,
            Err(err) => panic!("{err}"),
        }
    }

    /// Count the bytes of `buf[offset..offset + len]` equal to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::OutOfRange`] if the range does not lie within
    /// `buf`.
    fn try_count_range(
        &self,
        buf: &[u8],
        offset: usize,
        len: usize,
        target: u8,
    ) -> Result<usize, CountError> {
        let view = ByteRange::new(offset, len).slice(buf)?;
        Ok(self.count(view, target))
    }
}

impl<T: CountEq + ?Sized> CountEq for &T {
    fn count(&self, haystack: &[u8], target: u8) -> usize {
        (**self).count(haystack, target)
    }
}

/// A byte counter bound to one kernel.
///
/// ```rust
/// use counteq::{CountEq, Counter};
///
/// let counter = Counter::default();
/// let buf = [0u8, 0, 0, 0];
/// assert_eq!(counter.count_range(&buf, 1, 2, 0), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    kernel: Kernel,
    min_vector_len: usize,
}

impl Counter {
    /// Build a counter from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::UnsupportedKernel`] if the requested kernel
    /// cannot run on this CPU.
    pub fn new(options: CounterOptions) -> Result<Self, CountError> {
        let kernel = match options.kernel {
            Some(kernel) if !kernel.is_available() => {
                return Err(CountError::UnsupportedKernel(kernel));
            }
            Some(kernel) => kernel,
            None => Kernel::detect(),
        };
        log::debug!(
            "byte counter using {kernel} for ranges of at least {} bytes",
            options.min_vector_len
        );
        Ok(Self {
            kernel,
            min_vector_len: options.min_vector_len,
        })
    }

    /// The kernel used for ranges of at least [`Counter::min_vector_len`]
    /// bytes.
    #[must_use]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Shorter ranges are counted with the scalar loop.
    #[must_use]
    pub fn min_vector_len(&self) -> usize {
        self.min_vector_len
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            kernel: Kernel::detect(),
            min_vector_len: CounterOptions::default().min_vector_len,
        }
    }
}

impl CountEq for Counter {
    #[inline]
    fn count(&self, haystack: &[u8], target: u8) -> usize {
        if haystack.len() < self.min_vector_len {
            reference::count(haystack, target)
        } else {
            self.kernel.count(haystack, target)
        }
    }
}
