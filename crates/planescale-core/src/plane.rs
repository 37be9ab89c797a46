//! Plane containers
//!
//! A plane is a single-channel grid of samples addressed row by row
//! through a stride. Three flavors exist:
//!
//! - [`Plane`] owns its samples
//! - [`PlaneView`] borrows a caller buffer read-only
//! - [`PlaneViewMut`] borrows a caller buffer for writing
//!
//! All constructors validate that the buffer holds
//! `(height - 1) * stride + width` samples, so row accessors never index
//! past the end of the buffer. The last row does not need stride padding.

use crate::error::{Error, Result};
use crate::sample::Sample;

/// Minimum number of samples a buffer needs to back a plane.
///
/// Returns `None` on arithmetic overflow. A zero-height plane needs no
/// storage.
pub fn required_len(width: u32, height: u32, stride: usize) -> Option<usize> {
    if height == 0 {
        return Some(0);
    }
    (height as usize - 1)
        .checked_mul(stride)?
        .checked_add(width as usize)
}

/// Allocate a vector of `len` copies of `value`, reporting allocation
/// failure as [`Error::AllocationFailed`] instead of aborting.
///
/// Scaler scratch rows come from here. They carry only the alignment of
/// `T`, not 64 bytes: every row kernel is scalar and none reads them
/// with vector loads.
pub fn try_filled_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed)?;
    data.resize(len, value);
    Ok(data)
}

fn validate(width: u32, height: u32, stride: usize, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if stride < width as usize {
        return Err(Error::InvalidStride { stride, width });
    }
    let required = required_len(width, height, stride).ok_or(Error::BufferTooSmall {
        required: usize::MAX,
        actual: len,
    })?;
    if len < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

// ============================================================================
// Owned plane
// ============================================================================

/// An owned plane of samples.
///
/// # Examples
///
/// ```
/// use planescale_core::Plane;
///
/// let plane = Plane::<u8>::from_fn(4, 2, |x, y| (x + 10 * y) as u8).unwrap();
/// assert_eq!(plane.row(1), &[10, 11, 12, 13]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane<T> {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<T>,
}

impl<T: Sample> Plane<T> {
    /// Create a zero-filled plane with `stride == width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::AllocationFailed`] if the samples cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_stride(width, height, width as usize)
    }

    /// Create a zero-filled plane with explicit row padding.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if stride < width as usize {
            return Err(Error::InvalidStride { stride, width });
        }
        let len = (height as usize)
            .checked_mul(stride)
            .ok_or(Error::AllocationFailed)?;
        let data = try_filled_vec(len, T::default())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Wrap a tightly packed sample vector (`stride == width`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] unless `data.len() == width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::SizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride: width as usize,
            data,
        })
    }

    /// Wrap a padded sample vector.
    pub fn from_vec_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<T>,
    ) -> Result<Self> {
        validate(width, height, stride, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Build a plane by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Result<Self> {
        let mut plane = Self::new(width, height)?;
        for y in 0..height {
            for (x, v) in plane.row_mut(y).iter_mut().enumerate() {
                *v = f(x as u32, y);
            }
        }
        Ok(plane)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples between the starts of consecutive rows
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The full backing buffer, padding included
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `y` without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    /// Mutable row `y` without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.stride + x as usize).copied()
    }

    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds { x, y });
        }
        self.data[y as usize * self.stride + x as usize] = value;
        Ok(())
    }

    /// Set every sample (padding included) to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copy with the row order reversed.
    pub fn flipped_vertical(&self) -> Result<Self> {
        let h = self.height;
        Self::from_fn(self.width, h, |x, y| self.row(h - 1 - y)[x as usize])
    }

    /// Iterate rows top to bottom, without padding.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn view(&self) -> PlaneView<'_, T> {
        PlaneView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    pub fn view_mut(&mut self) -> PlaneViewMut<'_, T> {
        PlaneViewMut {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: &mut self.data,
        }
    }
}

// ============================================================================
// Borrowed views
// ============================================================================

/// A read-only plane over a caller buffer.
#[derive(Debug, Clone, Copy)]
pub struct PlaneView<'a, T> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a [T],
}

impl<'a, T: Sample> PlaneView<'a, T> {
    /// Describe `data` as a `width x height` plane with the given stride.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidStride`] if `stride < width`
    /// - [`Error::BufferTooSmall`] if `data` cannot hold the last row
    pub fn from_slice(width: u32, height: u32, stride: usize, data: &'a [T]) -> Result<Self> {
        validate(width, height, stride, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Row `y` without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.stride + x as usize).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width as usize
    }

    /// Copy into a tightly packed owned plane.
    pub fn to_plane(&self) -> Result<Plane<T>> {
        let mut out = Plane::new(self.width, self.height)?;
        for y in 0..self.height {
            out.row_mut(y).copy_from_slice(self.row(y));
        }
        Ok(out)
    }
}

/// A writable plane over a caller buffer.
#[derive(Debug)]
pub struct PlaneViewMut<'a, T> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a mut [T],
}

impl<'a, T: Sample> PlaneViewMut<'a, T> {
    /// Describe `data` as a writable `width x height` plane.
    ///
    /// Validation matches [`PlaneView::from_slice`].
    pub fn from_slice(
        width: u32,
        height: u32,
        stride: usize,
        data: &'a mut [T],
    ) -> Result<Self> {
        validate(width, height, stride, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[T] {
        &*self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.stride + x as usize).copied()
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PlaneView<'_, T> {
        PlaneView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: &*self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_filled_vec() {
        assert_eq!(try_filled_vec(3, 7u16).unwrap(), vec![7, 7, 7]);
        assert!(matches!(
            try_filled_vec(usize::MAX, 0u64),
            Err(Error::AllocationFailed)
        ));
    }

    #[test]
    fn test_required_len() {
        assert_eq!(required_len(4, 3, 6), Some(16));
        assert_eq!(required_len(4, 1, 100), Some(4));
        assert_eq!(required_len(4, 0, 6), Some(0));
        assert_eq!(required_len(1, u32::MAX, usize::MAX), None);
    }

    #[test]
    fn test_plane_new() {
        let plane = Plane::<u16>::new(5, 3).unwrap();
        assert_eq!(plane.width(), 5);
        assert_eq!(plane.height(), 3);
        assert_eq!(plane.stride(), 5);
        assert!(plane.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_plane_invalid_dimensions() {
        assert!(matches!(
            Plane::<u8>::new(0, 3),
            Err(Error::InvalidDimension { width: 0, height: 3 })
        ));
        assert!(matches!(
            Plane::<u8>::with_stride(8, 2, 4),
            Err(Error::InvalidStride { stride: 4, width: 8 })
        ));
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = Plane::<u8>::from_vec(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_padded_rows() {
        let data: Vec<u8> = (0..14).collect();
        let plane = Plane::from_vec_with_stride(4, 3, 5, data).unwrap();
        assert_eq!(plane.row(0), &[0, 1, 2, 3]);
        assert_eq!(plane.row(2), &[10, 11, 12, 13]);
        assert_eq!(plane.get(3, 1), Some(8));
        assert_eq!(plane.get(4, 1), None);
    }

    #[test]
    fn test_set_and_flip() {
        let mut plane = Plane::<u8>::new(2, 3).unwrap();
        plane.set(1, 0, 7).unwrap();
        plane.set(0, 2, 9).unwrap();
        assert!(plane.set(2, 0, 1).is_err());
        let flipped = plane.flipped_vertical().unwrap();
        assert_eq!(flipped.row(0), &[9, 0]);
        assert_eq!(flipped.row(2), &[0, 7]);
    }

    #[test]
    fn test_view_validation() {
        let buf = [0u8; 10];
        assert!(PlaneView::from_slice(4, 3, 3, &buf).is_err());
        assert!(matches!(
            PlaneView::from_slice(4, 3, 4, &buf),
            Err(Error::BufferTooSmall {
                required: 12,
                actual: 10
            })
        ));
        // Last row needs no padding: (3 - 1) * 4 + 2 = 10
        let view = PlaneView::from_slice(2, 3, 4, &buf).unwrap();
        assert!(!view.is_contiguous());
        assert_eq!(view.rows().count(), 3);
    }

    #[test]
    fn test_view_mut_roundtrip() {
        let mut buf = vec![0u16; 12];
        {
            let mut view = PlaneViewMut::from_slice(3, 2, 6, &mut buf).unwrap();
            view.row_mut(1).copy_from_slice(&[1, 2, 3]);
            assert_eq!(view.as_view().get(2, 1), Some(3));
        }
        assert_eq!(&buf[6..9], &[1, 2, 3]);
        let plane = PlaneView::from_slice(3, 2, 6, &buf)
            .unwrap()
            .to_plane()
            .unwrap();
        assert_eq!(plane.stride(), 3);
        assert_eq!(plane.row(1), &[1, 2, 3]);
    }
}
