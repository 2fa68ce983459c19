
pub mod plane;

use std::{fmt::Debug, num::NonZeroUsize};

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(cpuid_avx2, "avx2");

#[cfg(target_arch = "x86_64")]
pub use cpuid_avx2::get as has_avx2;

pub trait Pixel:
    Clone
    + Copy
    + Debug
    + Default
    + Into<u32>
    + TryFrom<u32>
    + MaxValue
    + 'static
{
    #[must_use]
    fn from_or_max(value: u32) -> Self;
}

impl<T> Pixel for T
where
    T: Clone
        + Copy
        + Debug
        + Default
        + Into<u32>
        + TryFrom<u32>
        + MaxValue
        + 'static,
{
    fn from_or_max(value: u32) -> Self {
        // Averages of valid samples always fit, so this only saturates on garbage input
        Self::try_from(value).unwrap_or_else(|_| Self::max_value())
    }
}

pub trait MaxValue {
    #[must_use]
    fn max_value() -> Self;
}

impl MaxValue for u8 {
    fn max_value() -> Self {
        u8::MAX
    }
}

impl MaxValue for u16 {
    fn max_value() -> Self {
        u16::MAX
    }
}

/// Number of samples a strided region of `cols` x `rows` spans, measured
/// from its first sample to one past its last.
///
/// Returns `None` when the span does not fit in `usize`, which no slice can
/// cover. `rows` must be at least 1.
#[must_use]
pub const fn region_len(stride: NonZeroUsize, cols: usize, rows: usize) -> Option<usize> {
    match rows.saturating_sub(1).checked_mul(stride.get()) {
        Some(span) => span.checked_add(cols),
        None => None,
    }
}

/// Copies a rectangular block of pixels between two strided buffers.
///
/// When both strides equal `width` the rows are contiguous and the whole region
/// moves in one `copy_from_slice`. Otherwise each row is copied on its own and the
/// samples between rows are left alone in `dest`.
///
/// # Parameters
/// - `dest`: Destination buffer, starting at the block origin
/// - `dest_stride`: Samples per row in the destination buffer (including padding)
/// - `src`: Source buffer, starting at the block origin
/// - `src_stride`: Samples per row in the source buffer (including padding)
/// - `width`: Samples to copy per row
/// - `height`: Rows to copy
///
/// # Panics
/// Panics if either buffer is shorter than the region it is addressed with.
pub fn copy_block<T: Pixel>(
    dest: &mut [T],
    dest_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let height = height.get();
    let width = width.get();
    let src_stride = src_stride.get();
    let dest_stride = dest_stride.get();

    if src_stride == dest_stride && src_stride == width {
        dest[..width * height].copy_from_slice(&src[..width * height]);
    } else {
        for i in 0..height {
            let src_start = i * src_stride;
            let dest_start = i * dest_stride;
            dest[dest_start..dest_start + width].copy_from_slice(&src[src_start..src_start + width]);
        }
    }
}
