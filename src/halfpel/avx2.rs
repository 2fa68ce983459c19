#![allow(clippy::undocumented_unsafe_blocks)]

use std::{arch::x86_64::*, num::NonZeroUsize};

use crate::{params::Rounding, util::Pixel};

// Only 8-bit samples have a vector path. Wider samples fall through to the scalar kernels.

#[target_feature(enable = "avx2")]
pub(super) fn halfpel8x8_h<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    match size_of::<T>() {
        1 => unsafe {
            halfpel8x8_h_u8(
                dst.as_mut_ptr() as *mut u8,
                dst_stride.get(),
                src.as_ptr() as *const u8,
                src_stride.get(),
                rounding,
            );
        },
        _ => super::rust::halfpel8x8_h(dst, dst_stride, src, src_stride, rounding),
    }
}

#[target_feature(enable = "avx2")]
pub(super) fn halfpel8x8_v<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    match size_of::<T>() {
        1 => unsafe {
            halfpel8x8_v_u8(
                dst.as_mut_ptr() as *mut u8,
                dst_stride.get(),
                src.as_ptr() as *const u8,
                src_stride.get(),
                rounding,
            );
        },
        _ => super::rust::halfpel8x8_v(dst, dst_stride, src, src_stride, rounding),
    }
}

#[target_feature(enable = "avx2")]
pub(super) fn halfpel8x8_hv<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    match size_of::<T>() {
        1 => unsafe {
            halfpel8x8_hv_u8(
                dst.as_mut_ptr() as *mut u8,
                dst_stride.get(),
                src.as_ptr() as *const u8,
                src_stride.get(),
                rounding,
            );
        },
        _ => super::rust::halfpel8x8_hv(dst, dst_stride, src, src_stride, rounding),
    }
}

/// `_mm_avg_epu8` computes `(a + b + 1) >> 1`. For `Rounding::Down` the low bit of
/// `a ^ b` is set exactly when the sum is odd, and subtracting it drops the tie
/// to the lower value.
#[target_feature(enable = "avx2")]
unsafe fn average_u8(a: __m128i, b: __m128i, rounding: Rounding) -> __m128i {
    let avg = _mm_avg_epu8(a, b);
    match rounding {
        Rounding::Up => avg,
        Rounding::Down => {
            let odd = _mm_and_si128(_mm_xor_si128(a, b), _mm_set1_epi8(1));
            _mm_sub_epi8(avg, odd)
        }
    }
}

#[target_feature(enable = "avx2")]
unsafe fn halfpel8x8_h_u8(
    dst: *mut u8,
    dst_stride: usize,
    src: *const u8,
    src_stride: usize,
    rounding: Rounding,
) {
    for j in 0..8 {
        let row = src.add(j * src_stride);
        let a = _mm_loadl_epi64(row.cast());
        let b = _mm_loadl_epi64(row.add(1).cast());
        _mm_storel_epi64(dst.add(j * dst_stride).cast(), average_u8(a, b, rounding));
    }
}

#[target_feature(enable = "avx2")]
unsafe fn halfpel8x8_v_u8(
    dst: *mut u8,
    dst_stride: usize,
    src: *const u8,
    src_stride: usize,
    rounding: Rounding,
) {
    let mut top = _mm_loadl_epi64(src.cast());
    for j in 0..8 {
        let bottom = _mm_loadl_epi64(src.add((j + 1) * src_stride).cast());
        _mm_storel_epi64(
            dst.add(j * dst_stride).cast(),
            average_u8(top, bottom, rounding),
        );
        top = bottom;
    }
}

/// Four-tap sums need 10 bits, so the rows are widened to 16-bit lanes and
/// packed back after the shift.
#[target_feature(enable = "avx2")]
unsafe fn halfpel8x8_hv_u8(
    dst: *mut u8,
    dst_stride: usize,
    src: *const u8,
    src_stride: usize,
    rounding: Rounding,
) {
    let round = _mm_set1_epi16((2 - rounding.bias()) as i16);
    let zero = _mm_setzero_si128();

    let mut top = pair_sum_u8(src);
    for j in 0..8 {
        let bottom = pair_sum_u8(src.add((j + 1) * src_stride));
        let sum = _mm_add_epi16(_mm_add_epi16(top, bottom), round);
        let packed = _mm_packus_epi16(_mm_srli_epi16(sum, 2), zero);
        _mm_storel_epi64(dst.add(j * dst_stride).cast(), packed);
        top = bottom;
    }
}

/// Sums each of the first 8 samples of a row with its right-hand neighbour.
#[target_feature(enable = "avx2")]
unsafe fn pair_sum_u8(row: *const u8) -> __m128i {
    let left = _mm_cvtepu8_epi16(_mm_loadl_epi64(row.cast()));
    let right = _mm_cvtepu8_epi16(_mm_loadl_epi64(row.add(1).cast()));
    _mm_add_epi16(left, right)
}
