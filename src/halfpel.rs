#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;


use std::{num::NonZeroUsize, sync::OnceLock};

use cfg_if::cfg_if;

use crate::{
    error::{BufferKind, HalfPelError},
    params::{HalfPel, Rounding},
    util::{Pixel, copy_block, region_len},
};

/// Width and height of every interpolated block.
pub const BLOCK_SIZE: usize = 8;

const BLOCK_STRIDE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(BLOCK_SIZE - 1);
// Wide enough to hold the 9x9 diagonal footprint.
const SNAPSHOT_STRIDE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(BLOCK_SIZE);
const SNAPSHOT_LEN: usize = (BLOCK_SIZE + 1) * (BLOCK_SIZE + 1);

/// Kernel implementation used for 8-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Scalar,
    Avx2,
}

/// Reports which implementation 8-bit calls will run on this machine.
///
/// 16-bit samples always use the scalar kernels.
#[must_use]
pub fn backend() -> Backend {
    static SELECTED: OnceLock<Backend> = OnceLock::new();
    *SELECTED.get_or_init(|| {
        let selected = detect_backend();
        log::debug!("half-pel interpolation using {:?} kernels", selected);
        selected
    })
}

fn detect_backend() -> Backend {
    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                return Backend::Avx2;
            }
        }
    }
    Backend::Scalar
}

/// Horizontal half-pel interpolation of an 8x8 block.
///
/// Each output sample is the average of a source sample and its right-hand
/// neighbour: `(a + b + 1 - rounding) >> 1`.
///
/// # Parameters
/// - `dst`: Destination buffer, starting at the block origin
/// - `src`: Source buffer, starting at the block origin
/// - `stride`: Samples per row in both buffers
/// - `rounding`: MPEG-4 rounding control for the current VOP
///
/// # Errors
/// The source must hold 9 columns by 8 rows and the destination 8 by 8, both
/// addressed with `stride`. When either check fails nothing is written.
pub fn halfpel8x8_h<T: Pixel>(
    dst: &mut [T],
    src: &[T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8(HalfPel::Horizontal, dst, stride, src, stride, rounding)
}

/// Vertical half-pel interpolation of an 8x8 block.
///
/// Each output sample is the average of a source sample and the one directly
/// below it: `(a + b + 1 - rounding) >> 1`.
///
/// # Errors
/// The source must hold 8 columns by 9 rows and the destination 8 by 8, both
/// addressed with `stride`. When either check fails nothing is written.
pub fn halfpel8x8_v<T: Pixel>(
    dst: &mut [T],
    src: &[T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8(HalfPel::Vertical, dst, stride, src, stride, rounding)
}

/// Diagonal (horizontal and vertical) half-pel interpolation of an 8x8 block.
///
/// Each output sample averages the 2x2 neighbourhood below and to the right of
/// its source position: `(a + b + c + d + 2 - rounding) >> 2`. This is a single
/// four-tap average, not the horizontal kernel followed by the vertical one,
/// and the two give different results whenever the intermediate rounding
/// matters.
///
/// # Errors
/// The source must hold 9 columns by 9 rows and the destination 8 by 8, both
/// addressed with `stride`. When either check fails nothing is written.
pub fn halfpel8x8_hv<T: Pixel>(
    dst: &mut [T],
    src: &[T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8(HalfPel::Diagonal, dst, stride, src, stride, rounding)
}

/// [`halfpel8x8_h`] with the source and destination sharing one buffer.
///
/// # Errors
/// Fails when `buf` does not hold the 9x8 source footprint.
pub fn halfpel8x8_h_in_place<T: Pixel>(
    buf: &mut [T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8_in_place(HalfPel::Horizontal, buf, stride, rounding)
}

/// [`halfpel8x8_v`] with the source and destination sharing one buffer.
///
/// # Errors
/// Fails when `buf` does not hold the 8x9 source footprint.
pub fn halfpel8x8_v_in_place<T: Pixel>(
    buf: &mut [T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8_in_place(HalfPel::Vertical, buf, stride, rounding)
}

/// [`halfpel8x8_hv`] with the source and destination sharing one buffer.
///
/// # Errors
/// Fails when `buf` does not hold the 9x9 source footprint.
pub fn halfpel8x8_hv_in_place<T: Pixel>(
    buf: &mut [T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    interpolate8x8_in_place(HalfPel::Diagonal, buf, stride, rounding)
}

/// Validates both buffers for `phase`, then produces the 8x8 block.
///
/// The source and destination may use different strides. `HalfPel::Full` is a
/// plain copy.
pub(crate) fn interpolate8x8<T: Pixel>(
    phase: HalfPel,
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    validate(phase, src.len(), src_stride)
        .and_then(|()| validate_destination(dst.len(), dst_stride))
        .inspect_err(|e| log::trace!("rejected {:?} interpolation: {}", phase, e))?;

    run_kernel(phase, dst, dst_stride, src, src_stride, rounding);
    Ok(())
}

fn interpolate8x8_in_place<T: Pixel>(
    phase: HalfPel,
    buf: &mut [T],
    stride: NonZeroUsize,
    rounding: Rounding,
) -> Result<(), HalfPelError> {
    // The source footprint covers the destination, so one check does for both.
    validate(phase, buf.len(), stride)
        .inspect_err(|e| log::trace!("rejected in-place {:?} interpolation: {}", phase, e))?;

    let (cols, rows) = phase.footprint();
    let mut snapshot = [T::default(); SNAPSHOT_LEN];
    copy_block(
        &mut snapshot,
        SNAPSHOT_STRIDE,
        buf,
        stride,
        nonzero(cols),
        nonzero(rows),
    );

    run_kernel(phase, buf, stride, &snapshot, SNAPSHOT_STRIDE, rounding);
    Ok(())
}

fn validate(phase: HalfPel, src_len: usize, stride: NonZeroUsize) -> Result<(), HalfPelError> {
    let (cols, rows) = phase.footprint();
    if stride.get() < cols {
        return Err(HalfPelError::InvalidStride {
            stride: stride.get(),
            min: cols,
        });
    }

    // A span past `usize::MAX` cannot be covered by any slice.
    let required = region_len(stride, cols, rows).unwrap_or(usize::MAX);
    if src_len < required {
        return Err(HalfPelError::BufferTooSmall {
            buffer: BufferKind::Source,
            required,
            actual: src_len,
        });
    }
    Ok(())
}

fn validate_destination(dst_len: usize, stride: NonZeroUsize) -> Result<(), HalfPelError> {
    if stride.get() < BLOCK_SIZE {
        return Err(HalfPelError::InvalidStride {
            stride: stride.get(),
            min: BLOCK_SIZE,
        });
    }

    let required = region_len(stride, BLOCK_SIZE, BLOCK_SIZE).unwrap_or(usize::MAX);
    if dst_len < required {
        return Err(HalfPelError::BufferTooSmall {
            buffer: BufferKind::Destination,
            required,
            actual: dst_len,
        });
    }
    Ok(())
}

/// Runs the kernel for `phase`. Both buffers must already be validated.
fn run_kernel<T: Pixel>(
    phase: HalfPel,
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    if phase == HalfPel::Full {
        copy_block(dst, dst_stride, src, src_stride, BLOCK_STRIDE, BLOCK_STRIDE);
        return;
    }

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if backend() == Backend::Avx2 {
                // SAFETY: AVX2 was detected, and the caller validated both footprints
                unsafe {
                    match phase {
                        HalfPel::Horizontal => avx2::halfpel8x8_h(dst, dst_stride, src, src_stride, rounding),
                        HalfPel::Vertical => avx2::halfpel8x8_v(dst, dst_stride, src, src_stride, rounding),
                        HalfPel::Diagonal => avx2::halfpel8x8_hv(dst, dst_stride, src, src_stride, rounding),
                        HalfPel::Full => {}
                    }
                }
                return;
            }
        }
    }

    match phase {
        HalfPel::Horizontal => rust::halfpel8x8_h(dst, dst_stride, src, src_stride, rounding),
        HalfPel::Vertical => rust::halfpel8x8_v(dst, dst_stride, src, src_stride, rounding),
        HalfPel::Diagonal => rust::halfpel8x8_hv(dst, dst_stride, src, src_stride, rounding),
        HalfPel::Full => {}
    }
}

const fn nonzero(value: usize) -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(value.saturating_sub(1))
}
