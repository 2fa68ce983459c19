use std::num::NonZeroUsize;

use super::BLOCK_SIZE;
use crate::{params::Rounding, util::Pixel};

pub(super) fn halfpel8x8_h<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    halfpel_h_impl::<T, BLOCK_SIZE, BLOCK_SIZE>(dst, dst_stride, src, src_stride, rounding);
}

pub(super) fn halfpel8x8_v<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    halfpel_v_impl::<T, BLOCK_SIZE, BLOCK_SIZE>(dst, dst_stride, src, src_stride, rounding);
}

pub(super) fn halfpel8x8_hv<T: Pixel>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    halfpel_hv_impl::<T, BLOCK_SIZE, BLOCK_SIZE>(dst, dst_stride, src, src_stride, rounding);
}

fn halfpel_h_impl<T: Pixel, const WIDTH: usize, const HEIGHT: usize>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    let round = 1 - rounding.bias();
    for j in 0..HEIGHT {
        let src_row = &src[j * src_stride.get()..][..WIDTH + 1];
        let dst_row = &mut dst[j * dst_stride.get()..][..WIDTH];

        for (out, pair) in dst_row.iter_mut().zip(src_row.windows(2)) {
            let a: u32 = pair[0].into();
            let b: u32 = pair[1].into();
            *out = T::from_or_max((a + b + round) >> 1);
        }
    }
}

fn halfpel_v_impl<T: Pixel, const WIDTH: usize, const HEIGHT: usize>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    let round = 1 - rounding.bias();
    for j in 0..HEIGHT {
        let top = &src[j * src_stride.get()..][..WIDTH];
        let bottom = &src[(j + 1) * src_stride.get()..][..WIDTH];
        let dst_row = &mut dst[j * dst_stride.get()..][..WIDTH];

        for ((out, &a), &b) in dst_row.iter_mut().zip(top).zip(bottom) {
            let a: u32 = a.into();
            let b: u32 = b.into();
            *out = T::from_or_max((a + b + round) >> 1);
        }
    }
}

fn halfpel_hv_impl<T: Pixel, const WIDTH: usize, const HEIGHT: usize>(
    dst: &mut [T],
    dst_stride: NonZeroUsize,
    src: &[T],
    src_stride: NonZeroUsize,
    rounding: Rounding,
) {
    let round = 2 - rounding.bias();
    for j in 0..HEIGHT {
        let top = &src[j * src_stride.get()..][..WIDTH + 1];
        let bottom = &src[(j + 1) * src_stride.get()..][..WIDTH + 1];
        let dst_row = &mut dst[j * dst_stride.get()..][..WIDTH];

        for ((out, t), b) in dst_row
            .iter_mut()
            .zip(top.windows(2))
            .zip(bottom.windows(2))
        {
            let sum = widen(t[0]) + widen(t[1]) + widen(b[0]) + widen(b[1]);
            *out = T::from_or_max((sum + round) >> 2);
        }
    }
}

#[inline]
fn widen<T: Pixel>(pixel: T) -> u32 {
    pixel.into()
}
