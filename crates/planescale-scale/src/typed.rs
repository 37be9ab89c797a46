//! Scaling between validated planes

use crate::api::scale_generic;
use crate::error::{ScaleError, ScaleResult};
use crate::store::{Keep, Narrow, ScaleSample, Store};
use planescale_core::{FilterMode, Plane, PlaneView, PlaneViewMut};

fn dim(v: u32) -> ScaleResult<i32> {
    i32::try_from(v)
        .map_err(|_| ScaleError::InvalidParameters(format!("dimension {} exceeds i32", v)))
}

fn run<T: ScaleSample, St: Store>(
    src: &PlaneView<'_, T>,
    dst: &mut PlaneViewMut<'_, St::Out>,
    filter: FilterMode,
    up2_first: bool,
    st: St,
) -> ScaleResult<()> {
    let (sw, sh) = (dim(src.width())?, dim(src.height())?);
    let (dw, dh) = (dim(dst.width())?, dim(dst.height())?);
    let dst_stride = dst.stride();
    scale_generic(
        src.data(),
        src.stride(),
        sw,
        sh,
        dst.data_mut(),
        dst_stride,
        dw,
        dh,
        filter,
        up2_first,
        st,
    )
}

/// Scale `src` into a new `width x height` plane.
///
/// # Examples
///
/// ```
/// use planescale_core::{FilterMode, Plane};
/// use planescale_scale::scale;
///
/// let src = Plane::<u8>::from_fn(8, 8, |x, _| (x * 16) as u8).unwrap();
/// let half = scale(&src.view(), 4, 4, FilterMode::Box).unwrap();
/// assert_eq!(half.row(0), &[8, 40, 72, 104]);
/// ```
pub fn scale<T: ScaleSample>(
    src: &PlaneView<'_, T>,
    width: u32,
    height: u32,
    filter: FilterMode,
) -> ScaleResult<Plane<T>> {
    let mut dst = Plane::new(width, height)?;
    scale_into(src, &mut dst.view_mut(), filter)?;
    Ok(dst)
}

/// Scale `src` to fill `dst`.
pub fn scale_into<T: ScaleSample>(
    src: &PlaneView<'_, T>,
    dst: &mut PlaneViewMut<'_, T>,
    filter: FilterMode,
) -> ScaleResult<()> {
    run(src, dst, filter, false, Keep::<T>::new())
}

/// Scale `src` into the 12-bit path, which prefers the 2x enlargements.
pub(crate) fn scale_into_12(
    src: &PlaneView<'_, u16>,
    dst: &mut PlaneViewMut<'_, u16>,
    filter: FilterMode,
) -> ScaleResult<()> {
    run(src, dst, filter, true, Keep::<u16>::new())
}

/// Scale a plane holding `depth` significant bits into an 8-bit plane.
pub fn scale_to_8(
    src: &PlaneView<'_, u16>,
    width: u32,
    height: u32,
    depth: u32,
    filter: FilterMode,
) -> ScaleResult<Plane<u8>> {
    let st = Narrow::for_depth(depth)?;
    let mut dst = Plane::new(width, height)?;
    run(src, &mut dst.view_mut(), filter, false, st)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_worked_example() {
        let src = Plane::<u8>::from_vec(
            4,
            4,
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150],
        )
        .unwrap();
        let dst = scale(&src.view(), 2, 2, FilterMode::Box).unwrap();
        assert_eq!(dst.row(0), &[25, 45]);
        assert_eq!(dst.row(1), &[105, 125]);
    }

    #[test]
    fn test_scale_into_padded() {
        let src = Plane::<u16>::from_fn(6, 4, |x, y| (x * 100 + y) as u16).unwrap();
        let mut dst = Plane::<u16>::with_stride(3, 2, 8).unwrap();
        scale_into(&src.view(), &mut dst.view_mut(), FilterMode::None).unwrap();
        assert_eq!(dst.row(0), &[101, 301, 501]);
        assert_eq!(dst.row(1), &[103, 303, 503]);
    }

    #[test]
    fn test_scale_to_8_depths() {
        let src = Plane::<u16>::from_fn(2, 2, |_, _| 1023).unwrap();
        let dst = scale_to_8(&src.view(), 2, 2, 10, FilterMode::Box).unwrap();
        assert!(dst.rows().all(|r| r == [255, 255]));
        let dst = scale_to_8(&src.view(), 1, 1, 12, FilterMode::Box).unwrap();
        assert_eq!(dst.row(0), &[63]);
        assert!(scale_to_8(&src.view(), 1, 1, 8, FilterMode::Box).is_err());
    }

    #[test]
    fn test_scale_rejects_empty() {
        let src = Plane::<u8>::new(4, 4).unwrap();
        assert!(scale(&src.view(), 0, 2, FilterMode::Box).is_err());
    }
}
