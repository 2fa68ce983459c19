use std::num::NonZeroUsize;

use crate::util::Pixel;

/// A read-only, row-major view of a plane.
///
/// Every accessor is bounds checked and returns `None` rather than panicking,
/// so a view can be handed to code that computes offsets from untrusted motion
/// vectors.
#[derive(Debug, Clone, Copy)]
pub struct PlaneRef<'a, T: Pixel> {
    data: &'a [T],
    stride: NonZeroUsize,
}

impl<'a, T: Pixel> PlaneRef<'a, T> {
    #[must_use]
    pub const fn new(data: &'a [T], stride: NonZeroUsize) -> Self {
        Self { data, stride }
    }

    #[must_use]
    pub const fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    /// Number of rows that start inside the data. The last one may be partial.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.data.len().div_ceil(self.stride.get())
    }

    #[must_use]
    pub const fn data(&self) -> &'a [T] {
        self.data
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        offset_of(self.stride, row, col).and_then(|i| self.data.get(i).copied())
    }

    /// The samples of `row`, truncated at the end of the data.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        let start = row.checked_mul(self.stride.get())?;
        let rest = self.data.get(start..)?;
        (!rest.is_empty()).then(|| &rest[..rest.len().min(self.stride.get())])
    }

    /// Everything from `(row, col)` to the end of the data, for use as a block origin.
    #[must_use]
    pub fn tail(&self, row: usize, col: usize) -> Option<&'a [T]> {
        let start = offset_of(self.stride, row, col)?;
        self.data.get(start..).filter(|rest| !rest.is_empty())
    }
}

/// A mutable, row-major view of a plane.
#[derive(Debug)]
pub struct PlaneMut<'a, T: Pixel> {
    data: &'a mut [T],
    stride: NonZeroUsize,
}

impl<'a, T: Pixel> PlaneMut<'a, T> {
    #[must_use]
    pub const fn new(data: &'a mut [T], stride: NonZeroUsize) -> Self {
        Self { data, stride }
    }

    #[must_use]
    pub const fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.data.len().div_ceil(self.stride.get())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> PlaneRef<'_, T> {
        PlaneRef::new(self.data, self.stride)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.view().get(row, col)
    }

    #[must_use]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        offset_of(self.stride, row, col).and_then(|i| self.data.get_mut(i))
    }

    /// Writes one sample. Returns `false` if the position lies outside the plane.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        self.get_mut(row, col).map(|p| *p = value).is_some()
    }

    #[must_use]
    pub fn tail_mut(&mut self, row: usize, col: usize) -> Option<&mut [T]> {
        let start = offset_of(self.stride, row, col)?;
        self.data.get_mut(start..).filter(|rest| !rest.is_empty())
    }
}

fn offset_of(stride: NonZeroUsize, row: usize, col: usize) -> Option<usize> {
    if col >= stride.get() {
        return None;
    }
    row.checked_mul(stride.get())?.checked_add(col)
}
