//! Row cursors over strided buffers
//!
//! A cursor is a base slice, the offset of row 0, a signed stride and the
//! row width. A negative stride walks the buffer bottom-up, which is how
//! vertical flips are expressed without copying.

/// Read-only row cursor
#[derive(Debug)]
pub struct SrcRows<'a, T> {
    data: &'a [T],
    origin: usize,
    stride: isize,
    width: usize,
    height: usize,
}

impl<T> Clone for SrcRows<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SrcRows<'_, T> {}

impl<'a, T> SrcRows<'a, T> {
    /// Top-down cursor. The caller has checked that `data` holds
    /// `height` rows of `width` samples at `stride`.
    pub fn new(data: &'a [T], stride: usize, width: usize, height: usize) -> Self {
        debug_assert!(height == 0 || (height - 1) * stride + width <= data.len());
        SrcRows {
            data,
            origin: 0,
            stride: stride as isize,
            width,
            height,
        }
    }

    /// Same rows in reverse order.
    pub fn flipped(self) -> Self {
        let last = self.origin as isize + (self.height as isize - 1) * self.stride;
        SrcRows {
            origin: last.max(0) as usize,
            stride: -self.stride,
            ..self
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [T] {
        debug_assert!(y < self.height);
        let start = (self.origin as isize + y as isize * self.stride) as usize;
        &self.data[start..start + self.width]
    }

    /// Row `y`, clamped to the last row.
    #[inline]
    pub fn row_clamped(&self, y: usize) -> &'a [T] {
        self.row(y.min(self.height - 1))
    }

    /// True when rows follow each other without padding, top-down.
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width as isize
    }

    /// All samples of a contiguous cursor.
    pub fn contiguous(&self) -> &'a [T] {
        debug_assert!(self.is_contiguous());
        &self.data[self.origin..self.origin + self.width * self.height]
    }
}

/// Writable row cursor
#[derive(Debug)]
pub struct DstRows<'a, T> {
    data: &'a mut [T],
    origin: usize,
    stride: isize,
    width: usize,
    height: usize,
}

impl<'a, T> DstRows<'a, T> {
    pub fn new(data: &'a mut [T], stride: usize, width: usize, height: usize) -> Self {
        debug_assert!(height == 0 || (height - 1) * stride + width <= data.len());
        DstRows {
            data,
            origin: 0,
            stride: stride as isize,
            width,
            height,
        }
    }

    /// Same rows in reverse order.
    pub fn flipped(self) -> Self {
        let last = self.origin as isize + (self.height as isize - 1) * self.stride;
        DstRows {
            origin: last.max(0) as usize,
            stride: -self.stride,
            ..self
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        debug_assert!(y < self.height);
        let start = (self.origin as isize + y as isize * self.stride) as usize;
        &mut self.data[start..start + self.width]
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width as isize
    }

    pub fn contiguous_mut(&mut self) -> &mut [T] {
        debug_assert!(self.is_contiguous());
        let len = self.width * self.height;
        &mut self.data[self.origin..self.origin + len]
    }
}
