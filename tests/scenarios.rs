//! End-to-end checks of the public API, written the way a decoder would call it.

use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use mpeg4_halfpel::{
    BufferKind, HalfPel, HalfPelError, MotionVector, PlaneMut, PlaneRef, Rounding, halfpel8x8_h,
    halfpel8x8_hv, halfpel8x8_hv_in_place, halfpel8x8_v, predict_block8x8,
};

fn stride(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n).context("stride must be non-zero")
}

#[test]
fn horizontal_first_row_even_sums() -> Result<()> {
    let mut src = vec![0u8; 81];
    src[..9].copy_from_slice(&[10, 20, 30, 40, 50, 60, 70, 80, 90]);

    for rounding in [Rounding::Up, Rounding::Down] {
        let mut dst = vec![0u8; 81];
        halfpel8x8_h(&mut dst, &src, stride(9)?, rounding)?;
        assert_eq!(&dst[..8], &[15, 25, 35, 45, 55, 65, 75, 85]);
    }
    Ok(())
}

#[test]
fn horizontal_first_row_odd_sums_depend_on_rounding() -> Result<()> {
    let mut src = vec![0u8; 81];
    src[..9].copy_from_slice(&[11, 20, 31, 40, 51, 60, 71, 80, 91]);
    let mut dst = vec![0u8; 81];

    halfpel8x8_h(&mut dst, &src, stride(9)?, Rounding::try_from(0)?)?;
    assert_eq!(&dst[..8], &[16, 26, 36, 46, 56, 66, 76, 86]);

    halfpel8x8_h(&mut dst, &src, stride(9)?, Rounding::try_from(1)?)?;
    assert_eq!(&dst[..8], &[15, 25, 35, 45, 55, 65, 75, 85]);
    Ok(())
}

#[test]
fn constant_block_survives_every_kernel() -> Result<()> {
    let src = vec![77u8; 81];
    for rounding in [Rounding::Up, Rounding::Down] {
        let mut dst = vec![0u8; 81];
        halfpel8x8_h(&mut dst, &src, stride(9)?, rounding)?;
        assert!(dst[..8].iter().all(|&p| p == 77));
        halfpel8x8_v(&mut dst, &src, stride(9)?, rounding)?;
        assert!(dst[63..71].iter().all(|&p| p == 77));
        halfpel8x8_hv(&mut dst, &src, stride(9)?, rounding)?;
        assert!((0..8).all(|r| dst[r * 9..][..8].iter().all(|&p| p == 77)));
    }
    Ok(())
}

#[test]
fn in_place_diagonal_inside_a_padded_plane() -> Result<()> {
    let s = stride(24)?;
    let plane: Vec<u8> = (0..24 * 12).map(|i| (i * 13 % 251) as u8).collect();

    let mut expected = plane.clone();
    halfpel8x8_hv(&mut expected[2 * 24 + 3..], &plane[2 * 24 + 3..], s, Rounding::Down)?;

    let mut actual = plane;
    halfpel8x8_hv_in_place(&mut actual[2 * 24 + 3..], s, Rounding::Down)?;

    assert_eq!(expected, actual);
    Ok(())
}

#[test]
fn errors_describe_the_failure() {
    let src = vec![0u8; 10];
    let mut dst = vec![0u8; 64];

    let err = halfpel8x8_v(&mut dst, &src, NonZeroUsize::MIN.saturating_add(7), Rounding::Up)
        .expect_err("source is far too short");
    assert_eq!(
        err,
        HalfPelError::BufferTooSmall {
            buffer: BufferKind::Source,
            required: 72,
            actual: 10,
        }
    );
    assert_eq!(
        err.to_string(),
        "source buffer holds 10 samples, but the block needs 72"
    );
    assert_eq!(
        Rounding::try_from(3).map_err(|e| e.to_string()),
        Err("invalid rounding control 3, must be 0 or 1".to_owned())
    );
}

#[test]
fn predict_a_row_of_blocks() -> Result<()> {
    let ref_stride = stride(48)?;
    let reference: Vec<u8> = (0..48 * 16).map(|i| (i % 48 * 5) as u8).collect();
    let ref_plane = PlaneRef::new(&reference, ref_stride);

    let dst_stride = stride(32)?;
    let mut dest = vec![0u8; 32 * 8];
    let mut dst_plane = PlaneMut::new(&mut dest, dst_stride);

    let mut phases = Vec::new();
    for (i, mv) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
        let mv = MotionVector::new(mv.0, mv.1);
        phases.push(predict_block8x8(&mut dst_plane, i * 8, 0, &ref_plane, i * 8 + 2, 2, mv, Rounding::Up)?);
    }

    assert_eq!(
        phases,
        [HalfPel::Full, HalfPel::Horizontal, HalfPel::Vertical, HalfPel::Diagonal]
    );
    // every reference row reads 0, 5, 10, ..., so only horizontal steps change the value
    assert_eq!(dest[0], 10);
    // (50 + 55 + 1) >> 1
    assert_eq!(dest[8], 53);
    assert_eq!(dest[16], 90);
    // (130 + 135 + 130 + 135 + 2) >> 2
    assert_eq!(dest[24], 133);
    Ok(())
}
