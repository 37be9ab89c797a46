//! Plane scaling dispatch
//!
//! [`select_path`] picks the cheapest routine for a ratio and filter; the
//! generic runner executes it for any sample type and output store.

mod area;
mod bilinear;
mod copy;
mod down;
mod simple;
mod up2;
mod vertical;

use crate::cursor::{DstRows, SrcRows};
use crate::error::ScaleResult;
use crate::reduce::reduce_filter;
use crate::store::{ScaleSample, Store};
use log::debug;
use planescale_core::FilterMode;
use std::fmt;

pub(crate) use copy::copy_rows;
pub(crate) use down::down2;

/// Routine chosen for one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalePath {
    /// Same size
    Copy,
    /// Width unchanged, rows blended
    Vertical,
    /// 3/4 on both axes
    Down34,
    /// 1/2 on both axes
    Down2,
    /// 3/8 on both axes
    Down38,
    /// 1/4 on both axes
    Down4,
    /// Area average for arbitrary reductions
    Box,
    /// 2x width, linear
    Up2Linear,
    /// 2x both axes, bilinear
    Up2Bilinear,
    /// Filtered, height growing
    BilinearUp,
    /// Filtered, height shrinking or unchanged
    BilinearDown,
    /// Point sampling
    Simple,
}

impl fmt::Display for ScalePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalePath::Copy => "copy",
            ScalePath::Vertical => "vertical",
            ScalePath::Down34 => "down 3/4",
            ScalePath::Down2 => "down 1/2",
            ScalePath::Down38 => "down 3/8",
            ScalePath::Down4 => "down 1/4",
            ScalePath::Box => "box",
            ScalePath::Up2Linear => "up 2x linear",
            ScalePath::Up2Bilinear => "up 2x bilinear",
            ScalePath::BilinearUp => "bilinear up",
            ScalePath::BilinearDown => "bilinear down",
            ScalePath::Simple => "simple",
        };
        f.write_str(name)
    }
}

fn up2_path(sw: i64, sh: i64, dw: i64, dh: i64, filter: FilterMode) -> Option<ScalePath> {
    if (dw + 1) / 2 == sw && filter == FilterMode::Linear {
        return Some(ScalePath::Up2Linear);
    }
    if (dh + 1) / 2 == sh
        && (dw + 1) / 2 == sw
        && matches!(filter, FilterMode::Bilinear | FilterMode::Box)
    {
        return Some(ScalePath::Up2Bilinear);
    }
    None
}

/// Routine for scaling `src` to `dst` with an already reduced `filter`.
///
/// `src_width` may be negative (mirrored), which rules out every exact
/// ratio path. `src_height` must be positive.
pub fn select_path(
    src_width: i32,
    src_height: i32,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScalePath {
    let (sw, sh) = (i64::from(src_width), i64::from(src_height));
    let (dw, dh) = (i64::from(dst_width), i64::from(dst_height));
    debug_assert!(sh > 0);

    if dw == sw && dh == sh {
        return ScalePath::Copy;
    }
    if dw == sw && filter != FilterMode::Box {
        return ScalePath::Vertical;
    }
    if dw <= sw.abs() && dh <= sh {
        if 4 * dw == 3 * sw && 4 * dh == 3 * sh {
            return ScalePath::Down34;
        }
        if 2 * dw == sw && 2 * dh == sh {
            return ScalePath::Down2;
        }
        if 8 * dw == 3 * sw && 8 * dh == 3 * sh {
            return ScalePath::Down38;
        }
        if 4 * dw == sw
            && 4 * dh == sh
            && matches!(filter, FilterMode::Box | FilterMode::None)
        {
            return ScalePath::Down4;
        }
    }
    if filter == FilterMode::Box && 2 * dh < sh {
        return ScalePath::Box;
    }
    if let Some(path) = up2_path(sw, sh, dw, dh, filter) {
        return path;
    }
    if filter.is_filtering() && dh > sh {
        return ScalePath::BilinearUp;
    }
    if filter.is_filtering() {
        return ScalePath::BilinearDown;
    }
    ScalePath::Simple
}

/// Reduce the filter, flip a negative height and pick a path.
///
/// With `up2_first` the 2x enlargements are checked before anything else.
pub(crate) fn plan(
    src_width: i32,
    src_height: i32,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
    up2_first: bool,
) -> (FilterMode, ScalePath) {
    let filter = reduce_filter(src_width, src_height, dst_width, dst_height, filter);
    let sh = src_height.abs();
    let early = if up2_first {
        up2_path(
            i64::from(src_width),
            i64::from(sh),
            i64::from(dst_width),
            i64::from(dst_height),
            filter,
        )
    } else {
        None
    };
    let path = early
        .unwrap_or_else(|| select_path(src_width, sh, dst_width, dst_height, filter));
    (filter, path)
}

/// Scale `src` into `dst`.
///
/// `src` rows are top-down with the magnitude of `src_width`; a negative
/// `src_height` walks them bottom-up.
pub(crate) fn scale_rows<T: ScaleSample, St: Store>(
    src: SrcRows<'_, T>,
    src_width: i32,
    src_height: i32,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    up2_first: bool,
    st: St,
) -> ScaleResult<()> {
    let (dw, dh) = (dst.width() as i32, dst.height() as i32);
    let (filter, path) = plan(src_width, src_height, dw, dh, filter, up2_first);
    debug!(
        "scale {}x{} -> {}x{} ({}-bit): {} via {}",
        src_width,
        src_height,
        dw,
        dh,
        T::BITS,
        filter,
        path
    );

    let src = if src_height < 0 { src.flipped() } else { src };
    let mirror = src_width < 0;
    match path {
        ScalePath::Copy => copy::copy_rows(src, dst, st),
        ScalePath::Vertical => vertical::scale_vertical(src, dst, filter, st),
        ScalePath::Down34 => down::down34(src, dst, filter, st),
        ScalePath::Down2 => down::down2(src, dst, filter, st),
        ScalePath::Down38 => down::down38(src, dst, filter, st),
        ScalePath::Down4 => down::down4(src, dst, filter, st),
        ScalePath::Box => area::scale_box(src, mirror, dst, st)?,
        ScalePath::Up2Linear => up2::up2_linear(src, dst, st),
        ScalePath::Up2Bilinear => up2::up2_bilinear(src, dst, st),
        ScalePath::BilinearUp => bilinear::bilinear_up(src, src_width, dst, filter, st)?,
        ScalePath::BilinearDown => bilinear::bilinear_down(src, src_width, dst, filter, st)?,
        ScalePath::Simple => simple::scale_simple(src, src_width, dst, st),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(sw: i32, sh: i32, dw: i32, dh: i32, filter: FilterMode) -> ScalePath {
        plan(sw, sh, dw, dh, filter, false).1
    }

    #[test]
    fn test_exact_ratios() {
        assert_eq!(path(64, 64, 64, 64, FilterMode::Box), ScalePath::Copy);
        assert_eq!(path(64, 64, 48, 48, FilterMode::Box), ScalePath::Down34);
        assert_eq!(path(64, 64, 32, 32, FilterMode::Box), ScalePath::Down2);
        assert_eq!(path(64, 64, 24, 24, FilterMode::Box), ScalePath::Down38);
        assert_eq!(path(64, 64, 16, 16, FilterMode::Box), ScalePath::Down4);
        assert_eq!(path(64, 64, 16, 16, FilterMode::None), ScalePath::Down4);
    }

    #[test]
    fn test_general_paths() {
        assert_eq!(path(64, 64, 16, 16, FilterMode::Bilinear), ScalePath::BilinearDown);
        assert_eq!(path(60, 60, 13, 11, FilterMode::Box), ScalePath::Box);
        assert_eq!(path(64, 48, 64, 20, FilterMode::Bilinear), ScalePath::Vertical);
        assert_eq!(path(16, 16, 40, 40, FilterMode::Bilinear), ScalePath::BilinearUp);
        assert_eq!(path(16, 16, 40, 40, FilterMode::None), ScalePath::Simple);
        assert_eq!(path(16, 16, 32, 32, FilterMode::Box), ScalePath::Up2Bilinear);
        assert_eq!(path(16, 16, 31, 8, FilterMode::Linear), ScalePath::Up2Linear);
    }

    #[test]
    fn test_mirror_skips_exact_paths() {
        assert_eq!(path(-64, 64, 64, 64, FilterMode::Box), ScalePath::Simple);
        assert_eq!(path(-64, 64, 32, 32, FilterMode::None), ScalePath::Simple);
        assert_eq!(path(-64, 64, 32, 32, FilterMode::Box), ScalePath::BilinearDown);
        assert_eq!(path(64, -64, 32, 32, FilterMode::Box), ScalePath::Down2);
    }

    #[test]
    fn test_up2_first_matches_plain_dispatch() {
        for (sw, sh, dw, dh) in [(16, 16, 32, 32), (16, 16, 31, 31), (16, 9, 31, 4), (7, 7, 3, 3)] {
            for filter in FilterMode::ALL {
                assert_eq!(plan(sw, sh, dw, dh, filter, true), plan(sw, sh, dw, dh, filter, false));
            }
        }
    }
}
