//! Raw plane entry points
//!
//! Buffers are slices with a row stride in samples. Dimensions are `i32`
//! so that sign can carry orientation: a negative source height reads
//! the source bottom-up and a negative source width reads it right to
//! left. Destination dimensions must be positive.

use crate::cursor::{DstRows, SrcRows};
use crate::error::{ScaleError, ScaleResult};
use crate::plane::{self, copy_rows, down2};
use crate::store::{Keep, Narrow, ScaleSample, Store};
use log::debug;
use planescale_core::{FilterMode, PlaneView, Sample};

/// Validated source rows.
pub(crate) fn source<'a, T: Sample>(
    data: &'a [T],
    stride: usize,
    width: i32,
    height: i32,
) -> ScaleResult<SrcRows<'a, T>> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidParameters(format!(
            "source dimensions {}x{}",
            width, height
        )));
    }
    let view = PlaneView::from_slice(width.unsigned_abs(), height.unsigned_abs(), stride, data)?;
    Ok(SrcRows::new(
        view.data(),
        view.stride(),
        view.width() as usize,
        view.height() as usize,
    ))
}

/// Validated destination rows.
pub(crate) fn destination<'a, T: Sample>(
    data: &'a mut [T],
    stride: usize,
    width: i32,
    height: i32,
) -> ScaleResult<DstRows<'a, T>> {
    if width <= 0 || height <= 0 {
        return Err(ScaleError::InvalidParameters(format!(
            "destination dimensions {}x{}",
            width, height
        )));
    }
    let (w, h) = (width as u32, height as u32);
    PlaneView::from_slice(w, h, stride, &*data)?;
    Ok(DstRows::new(data, stride, w as usize, h as usize))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn scale_generic<T: ScaleSample, St: Store>(
    src: &[T],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [St::Out],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
    up2_first: bool,
    st: St,
) -> ScaleResult<()> {
    let src_rows = source(src, src_stride, src_width, src_height)?;
    let mut dst_rows = destination(dst, dst_stride, dst_width, dst_height)?;
    plane::scale_rows(
        src_rows,
        src_width,
        src_height,
        &mut dst_rows,
        filter,
        up2_first,
        st,
    )
}

/// Scale an 8-bit plane.
///
/// # Examples
///
/// ```
/// use planescale_core::FilterMode;
/// use planescale_scale::scale_plane;
///
/// let src = [0u8, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150];
/// let mut dst = [0u8; 4];
/// scale_plane(&src, 4, 4, 4, &mut dst, 2, 2, 2, FilterMode::Box).unwrap();
/// assert_eq!(dst, [25, 45, 105, 125]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn scale_plane(
    src: &[u8],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    scale_generic(
        src,
        src_stride,
        src_width,
        src_height,
        dst,
        dst_stride,
        dst_width,
        dst_height,
        filter,
        false,
        Keep::<u8>::new(),
    )
}

/// Scale a 16-bit plane.
#[allow(clippy::too_many_arguments)]
pub fn scale_plane_16(
    src: &[u16],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u16],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    scale_generic(
        src,
        src_stride,
        src_width,
        src_height,
        dst,
        dst_stride,
        dst_width,
        dst_height,
        filter,
        false,
        Keep::<u16>::new(),
    )
}

/// Scale a plane of at most 12 significant bits stored in `u16`.
///
/// The 2x enlargements are tried before any other path.
#[allow(clippy::too_many_arguments)]
pub fn scale_plane_12(
    src: &[u16],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u16],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    scale_generic(
        src,
        src_stride,
        src_width,
        src_height,
        dst,
        dst_stride,
        dst_width,
        dst_height,
        filter,
        true,
        Keep::<u16>::new(),
    )
}

/// Scale a 16-bit plane into an 8-bit one.
///
/// Every output is `clamp255((v * scale) >> 16)`; `scale` selects how
/// many significant bits the source holds (32768 for 9 bits down to 256
/// for 16 bits).
#[allow(clippy::too_many_arguments)]
pub fn scale_plane_16_to_8(
    src: &[u16],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    scale: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    let st = Narrow::new(scale)?;
    scale_generic(
        src,
        src_stride,
        src_width,
        src_height,
        dst,
        dst_stride,
        dst_width,
        dst_height,
        filter,
        false,
        st,
    )
}

/// Halve a 16-bit plane of any size into an 8-bit one.
///
/// The destination must be `ceil(w / 2) x ceil(h / 2)`. An odd last
/// column or row is averaged with itself. `filter` is used as given.
#[allow(clippy::too_many_arguments)]
pub fn scale_plane_down2_16_to_8(
    src: &[u16],
    src_stride: usize,
    src_width: i32,
    src_height: i32,
    dst: &mut [u8],
    dst_stride: usize,
    dst_width: i32,
    dst_height: i32,
    scale: i32,
    filter: FilterMode,
) -> ScaleResult<()> {
    let st = Narrow::new(scale)?;
    if src_width <= 0 || src_height <= 0 {
        return Err(ScaleError::InvalidParameters(format!(
            "halving needs a positive source size, got {}x{}",
            src_width, src_height
        )));
    }
    let (ew, eh) = ((src_width + 1) / 2, (src_height + 1) / 2);
    if dst_width != ew || dst_height != eh {
        return Err(ScaleError::InvalidParameters(format!(
            "halving {}x{} gives {}x{}, not {}x{}",
            src_width, src_height, ew, eh, dst_width, dst_height
        )));
    }
    let src_rows = source(src, src_stride, src_width, src_height)?;
    let mut dst_rows = destination(dst, dst_stride, dst_width, dst_height)?;
    debug!(
        "halve {}x{} -> {}x{} (16 to 8, scale {}): {}",
        src_width, src_height, dst_width, dst_height, scale, filter
    );
    down2(src_rows, &mut dst_rows, filter, st);
    Ok(())
}

fn copy_generic<T: Sample>(
    src: &[T],
    src_stride: usize,
    dst: &mut [T],
    dst_stride: usize,
    width: i32,
    height: i32,
) -> ScaleResult<()> {
    if width <= 0 || height == 0 {
        return Ok(());
    }
    let src_rows = source(src, src_stride, width, height.abs())?;
    let dst_rows = destination(dst, dst_stride, width, height.abs())?;
    // Negative height writes the rows bottom-up
    let mut dst_rows = if height < 0 { dst_rows.flipped() } else { dst_rows };
    copy_rows(src_rows, &mut dst_rows, Keep::<T>::new());
    Ok(())
}

/// Copy an 8-bit plane. A negative `height` flips it vertically.
pub fn copy_plane(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: i32,
    height: i32,
) -> ScaleResult<()> {
    copy_generic(src, src_stride, dst, dst_stride, width, height)
}

/// Copy a 16-bit plane. A negative `height` flips it vertically.
pub fn copy_plane_16(
    src: &[u16],
    src_stride: usize,
    dst: &mut [u16],
    dst_stride: usize,
    width: i32,
    height: i32,
) -> ScaleResult<()> {
    copy_generic(src, src_stride, dst, dst_stride, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_dimensions() {
        let src = [0u8; 16];
        let mut dst = [0u8; 4];
        assert!(scale_plane(&src, 4, 0, 4, &mut dst, 2, 2, 2, FilterMode::Box).is_err());
        assert!(scale_plane(&src, 4, 4, 4, &mut dst, 2, -2, 2, FilterMode::Box).is_err());
        assert!(scale_plane(&src, 3, 4, 4, &mut dst, 2, 2, 2, FilterMode::Box).is_err());
        assert!(scale_plane(&src, 4, 4, 5, &mut dst, 2, 2, 2, FilterMode::Box).is_err());
        assert!(scale_plane(&src, 4, 4, 4, &mut dst, 2, 2, 3, FilterMode::Box).is_err());
    }

    #[test]
    fn test_narrowing_scale_checked() {
        let src = [0u16; 4];
        let mut dst = [0u8; 1];
        let err = scale_plane_16_to_8(&src, 2, 2, 2, &mut dst, 1, 1, 1, 100, FilterMode::Box);
        assert!(matches!(err, Err(ScaleError::InvalidScaleFactor(_))));
    }

    #[test]
    fn test_copy_plane_flip() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let mut dst = [0u8; 6];
        copy_plane(&src, 2, &mut dst, 2, 2, -3).unwrap();
        assert_eq!(dst, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_copy_plane_empty_is_noop() {
        let mut dst = [7u16; 2];
        copy_plane_16(&[], 0, &mut dst, 2, 0, 1).unwrap();
        copy_plane_16(&[], 0, &mut dst, 2, 2, 0).unwrap();
        assert_eq!(dst, [7, 7]);
    }

    #[test]
    fn test_down2_16_to_8_size_check() {
        let src = [1000u16; 15];
        let mut dst = [0u8; 6];
        assert!(
            scale_plane_down2_16_to_8(&src, 5, 5, 3, &mut dst, 3, 3, 2, 16384, FilterMode::Box)
                .is_ok()
        );
        assert!(dst.iter().all(|&v| v == 250));
        assert!(
            scale_plane_down2_16_to_8(&src, 5, 5, 3, &mut dst, 2, 2, 2, 16384, FilterMode::Box)
                .is_err()
        );
    }
}
