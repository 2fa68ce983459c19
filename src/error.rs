use std::fmt;

/// Which buffer a size check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Source,
    Destination,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// Errors returned by the interpolation and prediction entry points.
///
/// All of these are detected before the destination is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HalfPelError {
    /// The stride cannot hold the columns the kernel reads from a single row.
    #[error("stride {stride} is smaller than the {min} columns read per row")]
    InvalidStride { stride: usize, min: usize },

    /// A buffer does not cover the region addressed by the block.
    #[error("{buffer} buffer holds {actual} samples, but the block needs {required}")]
    BufferTooSmall {
        buffer: BufferKind,
        required: usize,
        actual: usize,
    },

    #[error("invalid rounding control {0}, must be 0 or 1")]
    InvalidRounding(i64),

    #[error("invalid half-pel phase {0}, must be 0-3")]
    InvalidHalfPel(i64),

    /// A block, after applying the motion vector, does not lie inside its plane.
    #[error("block at ({x}, {y}) lies outside its plane")]
    BlockOutOfBounds { x: i64, y: i64 },
}
