//! Start positions and steps for the row and column walkers

use crate::fixed::{center_start, fixed_div, fixed_div1};
use planescale_core::FilterMode;

/// Fixed-point start position and step on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaleStep {
    /// Horizontal start, 16.16
    pub x: i64,
    /// Vertical start, 16.16
    pub y: i64,
    /// Horizontal step, negative when mirrored
    pub dx: i64,
    /// Vertical step
    pub dy: i64,
}

/// Bilinear placement on one axis: centered when shrinking, endpoint
/// anchored when growing.
fn bilinear_axis(src: i64, dst: i64) -> (i64, i64) {
    if dst <= src {
        let d = fixed_div(src, dst);
        (center_start(d, -32768), d)
    } else if src > 1 && dst > 1 {
        (0, fixed_div1(src, dst))
    } else {
        (0, 0)
    }
}

/// Compute start positions and steps for `filter`.
///
/// A negative `src_width` mirrors horizontally: the start moves to the
/// last destination column and the step is negated. `src_height` must
/// already be positive.
pub fn scale_slope(
    src_width: i32,
    src_height: i32,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> ScaleStep {
    debug_assert!(src_width != 0 && src_height > 0);
    debug_assert!(dst_width > 0 && dst_height > 0);

    let sw = i64::from(src_width).abs();
    let sh = i64::from(src_height);
    let mut dw = i64::from(dst_width);
    let mut dh = i64::from(dst_height);

    // A single output from a very wide source samples the first column
    if dw == 1 && sw >= 32768 {
        dw = sw;
    }
    if dh == 1 && sh >= 32768 {
        dh = sh;
    }

    let mut step = match filter {
        FilterMode::Box => ScaleStep {
            x: 0,
            y: 0,
            dx: fixed_div(sw, dw),
            dy: fixed_div(sh, dh),
        },
        FilterMode::Bilinear => {
            let (x, dx) = bilinear_axis(sw, dw);
            let (y, dy) = bilinear_axis(sh, dh);
            ScaleStep { x, y, dx, dy }
        }
        FilterMode::Linear => {
            let (x, dx) = bilinear_axis(sw, dw);
            let dy = fixed_div(sh, dh);
            ScaleStep { x, y: dy >> 1, dx, dy }
        }
        FilterMode::None => {
            let dx = fixed_div(sw, dw);
            let dy = fixed_div(sh, dh);
            ScaleStep {
                x: center_start(dx, 0),
                y: center_start(dy, 0),
                dx,
                dy,
            }
        }
    };

    if src_width < 0 {
        step.x += (dw - 1) * step.dx;
        step.dx = -step.dx;
    }
    log::trace!(
        "slope {}x{} -> {}x{} {}: x={:#x} y={:#x} dx={:#x} dy={:#x}",
        src_width,
        src_height,
        dst_width,
        dst_height,
        filter,
        step.x,
        step.y,
        step.dx,
        step.dy
    );
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_slope_centers() {
        let s = scale_slope(8, 8, 4, 2, FilterMode::None);
        assert_eq!(s.dx, 0x2_0000);
        assert_eq!(s.dy, 0x4_0000);
        assert_eq!(s.x, 0x1_0000);
        assert_eq!(s.y, 0x2_0000);
    }

    #[test]
    fn test_box_slope_starts_at_zero() {
        let s = scale_slope(15, 9, 5, 3, FilterMode::Box);
        assert_eq!((s.x, s.y), (0, 0));
        assert_eq!((s.dx, s.dy), (0x3_0000, 0x3_0000));
    }

    #[test]
    fn test_bilinear_slope() {
        let down = scale_slope(8, 8, 4, 4, FilterMode::Bilinear);
        assert_eq!(down.dx, 0x2_0000);
        assert_eq!(down.x, 0x8000);

        let up = scale_slope(3, 3, 7, 7, FilterMode::Bilinear);
        assert_eq!(up.dx, 21845);
        assert_eq!(up.x, 0);

        let single = scale_slope(1, 4, 5, 8, FilterMode::Bilinear);
        assert_eq!((single.x, single.dx), (0, 0));
    }

    #[test]
    fn test_linear_slope_vertical_half_step() {
        let s = scale_slope(8, 8, 4, 4, FilterMode::Linear);
        assert_eq!(s.dy, 0x2_0000);
        assert_eq!(s.y, 0x1_0000);
    }

    #[test]
    fn test_mirrored_slope() {
        let s = scale_slope(-8, 8, 4, 4, FilterMode::None);
        assert_eq!(s.dx, -0x2_0000);
        assert_eq!(s.x, 0x1_0000 + 3 * 0x2_0000);
    }

    #[test]
    fn test_single_output_from_wide_source() {
        let s = scale_slope(40000, 2, 1, 1, FilterMode::None);
        assert_eq!(s.dx, 0x1_0000);
        assert_eq!(s.x, 0x8000);
    }
}
