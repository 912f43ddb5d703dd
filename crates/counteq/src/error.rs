use thiserror::Error;

use crate::Kernel;

/// Errors reported by the checked entry points and by configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// The requested range does not lie within the buffer.
    #[error("range {offset}+{len} is out of bounds for a buffer of {buffer_len} bytes")]
    OutOfRange {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Length of the buffer the range was applied to.
        buffer_len: usize,
    },
    /// The kernel needs instructions the running CPU does not have.
    #[error("kernel `{0}` is not supported on this CPU")]
    UnsupportedKernel(Kernel),
    /// A kernel name did not match any known kernel.
    #[error("unknown kernel name")]
    UnknownKernel,
}
