
use std::num::NonZeroUsize;

use crate::{
    error::HalfPelError,
    halfpel::{BLOCK_SIZE, interpolate8x8},
    params::{HalfPel, Rounding},
    util::{
        Pixel,
        plane::{PlaneMut, PlaneRef},
        region_len,
    },
};

/// A motion vector in half-pel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MotionVector {
    pub x: i32,
    pub y: i32,
}

impl MotionVector {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whole-pixel displacement, rounded toward negative infinity so that
    /// `-1` (half a pixel left) lands on the pixel to the left.
    #[must_use]
    pub const fn integer_part(self) -> (i32, i32) {
        (self.x >> 1, self.y >> 1)
    }

    #[must_use]
    pub const fn phase(self) -> HalfPel {
        HalfPel::from_vector(self.x, self.y)
    }
}

/// Predicts one 8x8 block from a reference plane.
///
/// The block at `(x, y)` in the reference, displaced by `mv`, is interpolated
/// with the kernel matching the vector's half-pel phase and written to
/// `(dst_x, dst_y)` in `dst`. Full-pel vectors copy the block unchanged.
///
/// The two planes may have different strides.
///
/// # Returns
/// The phase used for the block.
///
/// # Errors
/// - `BlockOutOfBounds` if the displaced reference block, including the extra
///   column or row its phase reads, or the destination block does not lie
///   entirely inside its plane. A block may not wrap from the end of one row
///   into the next.
/// - Any stride error from the kernel itself.
///
/// Nothing is written when an error is returned.
pub fn predict_block8x8<T: Pixel>(
    dst: &mut PlaneMut<'_, T>,
    dst_x: usize,
    dst_y: usize,
    reference: &PlaneRef<'_, T>,
    x: usize,
    y: usize,
    mv: MotionVector,
    rounding: Rounding,
) -> Result<HalfPel, HalfPelError> {
    let phase = mv.phase();
    let (cols, rows) = phase.footprint();
    let (dx, dy) = mv.integer_part();
    let ref_x = displace(x, dx);
    let ref_y = displace(y, dy);

    let src = usize::try_from(ref_x)
        .ok()
        .zip(usize::try_from(ref_y).ok())
        .filter(|&(col, row)| fits(reference.len(), reference.stride(), row, col, cols, rows))
        .and_then(|(col, row)| reference.tail(row, col))
        .ok_or(HalfPelError::BlockOutOfBounds { x: ref_x, y: ref_y })?;

    let dst_stride = dst.stride();
    let dst_out_of_bounds = HalfPelError::BlockOutOfBounds {
        x: displace(dst_x, 0),
        y: displace(dst_y, 0),
    };
    if !fits(dst.len(), dst_stride, dst_y, dst_x, BLOCK_SIZE, BLOCK_SIZE) {
        return Err(dst_out_of_bounds);
    }
    let dst_block = dst.tail_mut(dst_y, dst_x).ok_or(dst_out_of_bounds)?;

    interpolate8x8(phase, dst_block, dst_stride, src, reference.stride(), rounding)?;
    Ok(phase)
}

/// Whether a `cols` x `rows` block at `(row, col)` lies inside a plane of `len`
/// samples without wrapping across rows.
fn fits(
    len: usize,
    stride: NonZeroUsize,
    row: usize,
    col: usize,
    cols: usize,
    rows: usize,
) -> bool {
    col.checked_add(cols).is_some_and(|right| right <= stride.get())
        && row
            .checked_mul(stride.get())
            .and_then(|start| start.checked_add(col))
            .and_then(|start| start.checked_add(region_len(stride, cols, rows)?))
            .is_some_and(|end| end <= len)
}

/// Applies a whole-pixel displacement to a plane coordinate.
///
/// No slice reaches `i64::MAX` samples, so positions that do not fit clamp
/// there and are rejected by the bounds check like any other.
fn displace(pos: usize, delta: i32) -> i64 {
    i64::try_from(pos).map_or(i64::MAX, |pos| pos.saturating_add(i64::from(delta)))
}
