use core::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU8, Ordering},
};

#[cfg(target_arch = "aarch64")]
use crate::simd::neon;
#[cfg(target_arch = "x86_64")]
use crate::simd::x86;
use crate::{CountEq, CountError, reference, swar};

/// One concrete implementation of the byte count.
///
/// Every kernel produces exactly the same result as [`Kernel::Scalar`], the
/// reference loop; they differ only in speed and in the instructions they
/// need. [`Kernel::count`] never executes unsupported instructions: asking an
/// unavailable kernel to count falls back to [`Kernel::Swar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kernel {
    /// Byte-at-a-time reference loop.
    Scalar = 0,
    /// Portable 64-bit word-at-a-time kernel.
    Swar = 1,
    /// x86_64 SSE2, 16 bytes per step.
    Sse2 = 2,
    /// x86_64 AVX2, 32 bytes per step.
    Avx2 = 3,
    /// aarch64 NEON, 16 bytes per step.
    Neon = 4,
}

const UNDETECTED: u8 = u8::MAX;
static DETECTED: AtomicU8 = AtomicU8::new(UNDETECTED);

impl Kernel {
    /// Every kernel, narrowest first.
    pub const ALL: [Kernel; 5] = [
        Kernel::Scalar,
        Kernel::Swar,
        Kernel::Sse2,
        Kernel::Avx2,
        Kernel::Neon,
    ];

    /// Lowercase name, as accepted by [`str::parse`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            Kernel::Swar => "swar",
            Kernel::Sse2 => "sse2",
            Kernel::Avx2 => "avx2",
            Kernel::Neon => "neon",
        }
    }

    /// Bytes compared per step.
    #[must_use]
    pub const fn vector_width(self) -> usize {
        match self {
            Kernel::Scalar => 1,
            Kernel::Swar => 8,
            Kernel::Sse2 | Kernel::Neon => 16,
            Kernel::Avx2 => 32,
        }
    }

    /// Whether the running CPU can execute this kernel.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            Kernel::Scalar | Kernel::Swar => true,
            Kernel::Sse2 => has_sse2(),
            Kernel::Avx2 => has_avx2(),
            Kernel::Neon => has_neon(),
        }
    }

    /// The kernels the running CPU can execute, narrowest first.
    pub fn available() -> impl Iterator<Item = Kernel> {
        Self::ALL.into_iter().filter(|kernel| kernel.is_available())
    }

    /// The widest kernel the running CPU supports.
    ///
    /// Probed once per process; later calls read the cached answer.
    #[must_use]
    pub fn detect() -> Kernel {
        if let Some(kernel) = Self::from_repr(DETECTED.load(Ordering::Relaxed)) {
            return kernel;
        }
        let kernel = [Kernel::Avx2, Kernel::Sse2, Kernel::Neon]
            .into_iter()
            .find(|kernel| kernel.is_available())
            .unwrap_or(Kernel::Swar);
        log::debug!("detected byte count kernel: {kernel}");
        // Racing first callers store the same value.
        DETECTED.store(kernel as u8, Ordering::Relaxed);
        kernel
    }

    const fn from_repr(repr: u8) -> Option<Kernel> {
        match repr {
            0 => Some(Kernel::Scalar),
            1 => Some(Kernel::Swar),
            2 => Some(Kernel::Sse2),
            3 => Some(Kernel::Avx2),
            4 => Some(Kernel::Neon),
            _ => None,
        }
    }

    /// Count the bytes of `haystack` equal to `target` with this kernel.
    #[must_use]
    pub fn count(self, haystack: &[u8], target: u8) -> usize {
        match self {
            Kernel::Scalar => reference::count(haystack, target),
            #[cfg(target_arch = "x86_64")]
            Kernel::Sse2 if has_sse2() => {
                // SAFETY: SSE2 support was checked by `has_sse2`.
                unsafe { x86::count_sse2(haystack, target) }
            }
            #[cfg(target_arch = "x86_64")]
            Kernel::Avx2 if has_avx2() => {
                // SAFETY: AVX2 support was checked by `has_avx2`.
                unsafe { x86::count_avx2(haystack, target) }
            }
            #[cfg(target_arch = "aarch64")]
            Kernel::Neon if has_neon() => {
                // SAFETY: NEON support was checked by `has_neon`.
                unsafe { neon::count_neon(haystack, target) }
            }
            _ => swar::count(haystack, target),
        }
    }
}

impl CountEq for Kernel {
    fn count(&self, haystack: &[u8], target: u8) -> usize {
        Kernel::count(*self, haystack, target)
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kernel| kernel.name().eq_ignore_ascii_case(s))
            .ok_or(CountError::UnknownKernel)
    }
}

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn has_sse2() -> bool {
    std::is_x86_feature_detected!("sse2")
}

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn has_avx2() -> bool {
    std::is_x86_feature_detected!("avx2")
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn has_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(not(all(feature = "std", target_arch = "x86_64")))]
fn has_sse2() -> bool {
    cfg!(all(target_arch = "x86_64", target_feature = "sse2"))
}

#[cfg(not(all(feature = "std", target_arch = "x86_64")))]
fn has_avx2() -> bool {
    cfg!(all(target_arch = "x86_64", target_feature = "avx2"))
}

#[cfg(not(all(feature = "std", target_arch = "aarch64")))]
fn has_neon() -> bool {
    cfg!(all(target_arch = "aarch64", target_feature = "neon"))
}
