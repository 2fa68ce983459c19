#[cfg(test)]
mod tests;

use crate::error::HalfPelError;

/// The MPEG-4 `vop_rounding_type` control.
///
/// `Up` applies the full `+1` (two-tap) or `+2` (four-tap) bias before the shift,
/// so an average that falls exactly between two integers rounds up.
/// `Down` drops one from the bias, so the same tie rounds down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rounding {
    #[default]
    Up = 0,
    Down = 1,
}

impl Rounding {
    /// The amount subtracted from the rounding constant.
    #[must_use]
    pub const fn bias(self) -> u32 {
        self as u32
    }

    /// Encoders flip the rounding type on every P-VOP to stop drift accumulating.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl TryFrom<i64> for Rounding {
    type Error = HalfPelError;

    fn try_from(val: i64) -> Result<Self, Self::Error> {
        Ok(match val {
            0 => Self::Up,
            1 => Self::Down,
            _ => return Err(HalfPelError::InvalidRounding(val)),
        })
    }
}

impl From<bool> for Rounding {
    fn from(value: bool) -> Self {
        if value { Self::Down } else { Self::Up }
    }
}

impl From<Rounding> for u32 {
    fn from(value: Rounding) -> Self {
        value.bias()
    }
}

/// Sub-pixel phase of a block, as selected by the low bit of each
/// motion vector component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfPel {
    Full = 0,
    Horizontal = 1,
    Vertical = 2,
    Diagonal = 3,
}

impl HalfPel {
    /// Picks the phase from motion vector components expressed in half-pel units.
    #[must_use]
    pub const fn from_vector(x: i32, y: i32) -> Self {
        match (x & 1 != 0, y & 1 != 0) {
            (false, false) => Self::Full,
            (true, false) => Self::Horizontal,
            (false, true) => Self::Vertical,
            (true, true) => Self::Diagonal,
        }
    }

    /// Columns and rows read from the reference to produce one 8x8 block.
    #[must_use]
    pub const fn footprint(self) -> (usize, usize) {
        match self {
            Self::Full => (8, 8),
            Self::Horizontal => (9, 8),
            Self::Vertical => (8, 9),
            Self::Diagonal => (9, 9),
        }
    }
}

impl TryFrom<i64> for HalfPel {
    type Error = HalfPelError;

    fn try_from(val: i64) -> Result<Self, Self::Error> {
        Ok(match val {
            0 => Self::Full,
            1 => Self::Horizontal,
            2 => Self::Vertical,
            3 => Self::Diagonal,
            _ => return Err(HalfPelError::InvalidHalfPel(val)),
        })
    }
}
