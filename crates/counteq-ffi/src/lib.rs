//! Flat C ABI over [`counteq`].
//!
//! The exported functions take a raw pointer, two `size_t`s and a byte, so
//! any host that can `dlopen` a shared library can call them without
//! marshaling. Building with the `baseline` feature produces an artifact
//! whose `count_eq` is the scalar reference; the default build uses the
//! fastest kernel the CPU supports. Both artifacts export the same symbols,
//! so a harness can load either one interchangeably.
//!
//! See `include/counteq.h` for the C declarations.

use core::{ffi::CStr, slice};

use counteq::{ByteRange, Kernel, reference};

/// Status codes returned by [`count_eq_checked`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountEqStatus {
    /// The count was written to `out`.
    Ok = 0,
    /// `off + len` exceeds `buf_len`.
    OutOfRange = 1,
    /// `out` is null, or `src` is null while `buf_len` is not zero.
    NullPointer = 2,
}

/// The kernel behind [`count_eq`] in this build.
fn artifact_kernel() -> Kernel {
    if cfg!(feature = "baseline") {
        Kernel::Scalar
    } else {
        Kernel::detect()
    }
}

/// Borrow `len` bytes starting `off` bytes past `src` for the duration of
/// the call. A zero length never touches `src`.
///
/// # Safety
/// If `len` is not zero, `src.add(off)` must be valid for reads of `len`
/// bytes that are not written to for `'a`.
unsafe fn borrow_range<'a>(src: *const u8, off: usize, len: usize) -> &'a [u8] {
    if len == 0 {
        return &[];
    }
    // SAFETY: forwarded from the caller.
    unsafe { slice::from_raw_parts(src.add(off), len) }
}

/// Count the bytes in `src[off..off + len]` equal to `byte`.
///
/// Out-of-range arguments are not detected; use [`count_eq_checked`] when
/// the range is untrusted.
///
/// # Safety
/// `off + len` must not exceed the length of the allocation behind `src`,
/// and those bytes must not be written to during the call. When `len` is
/// zero, `src` is not read and may be null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn count_eq(src: *const u8, off: usize, len: usize, byte: u8) -> usize {
    // SAFETY: forwarded from the caller.
    let view = unsafe { borrow_range(src, off, len) };
    artifact_kernel().count(view, byte)
}

/// Count with the scalar reference loop, whatever this build's
/// [`count_eq`] uses.
///
/// # Safety
/// Same contract as [`count_eq`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn count_eq_baseline(
    src: *const u8,
    off: usize,
    len: usize,
    byte: u8,
) -> usize {
    // SAFETY: forwarded from the caller.
    let view = unsafe { borrow_range(src, off, len) };
    reference::count(view, byte)
}

/// Validate the range against `buf_len` before counting, and write the count
/// to `out`.
///
/// # Safety
/// `src` must be valid for reads of `buf_len` bytes (or null with `buf_len`
/// zero), and `out`, if not null, must be valid for a write of one `size_t`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn count_eq_checked(
    src: *const u8,
    buf_len: usize,
    off: usize,
    len: usize,
    byte: u8,
    out: *mut usize,
) -> CountEqStatus {
    if out.is_null() || (src.is_null() && buf_len != 0) {
        return CountEqStatus::NullPointer;
    }
    // SAFETY: `src` covers `buf_len` readable bytes per the caller.
    let buf = unsafe { borrow_range(src, 0, buf_len) };
    match ByteRange::new(off, len).slice(buf) {
        Ok(view) => {
            let count = artifact_kernel().count(view, byte);
            // SAFETY: `out` is non-null and writable per the caller.
            unsafe { out.write(count) };
            CountEqStatus::Ok
        }
        Err(err) => {
            log::debug!("count_eq_checked rejected: {err}");
            CountEqStatus::OutOfRange
        }
    }
}

/// Static, NUL-terminated name of the kernel behind [`count_eq`].
#[unsafe(no_mangle)]
pub extern "C" fn count_eq_kernel() -> *const core::ffi::c_char {
    kernel_name(artifact_kernel()).as_ptr()
}

fn kernel_name(kernel: Kernel) -> &'static CStr {
    match kernel {
        Kernel::Scalar => c"scalar",
        Kernel::Swar => c"swar",
        Kernel::Sse2 => c"sse2",
        Kernel::Avx2 => c"avx2",
        Kernel::Neon => c"neon",
    }
}
