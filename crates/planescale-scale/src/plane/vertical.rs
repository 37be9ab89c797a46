//! Height-only scaling

use crate::cursor::{DstRows, SrcRows};
use crate::fixed::{center_start, fixed_div, fixed_div1};
use crate::row::cols;
use crate::store::Store;
use log::trace;
use planescale_core::{FilterMode, Sample};

/// Scale rows only; columns are copied.
///
/// Shrinking blends the two rows around each output center. Growing maps
/// the last output row onto the last two source rows.
pub fn scale_vertical<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) {
    debug_assert!(src.width() == dst.width());
    let (sh, dh) = (src.height() as i64, dst.height() as i64);

    let (mut y, dy) = if dh <= sh {
        let dy = fixed_div(sh, dh);
        (center_start(dy, -32768), dy)
    } else if sh > 1 && dh > 1 {
        (0, fixed_div1(sh, dh))
    } else {
        (0, 0)
    };
    let max_y = if sh > 1 { ((sh - 1) << 16) - 1 } else { 0 };
    trace!("vertical: y={:#x} dy={:#x} max_y={:#x}", y, dy, max_y);

    for j in 0..dst.height() {
        y = y.min(max_y);
        let yi = (y >> 16) as usize;
        let f = if filter.is_filtering() { ((y >> 8) & 255) as u32 } else { 0 };
        cols::interpolate_row(src.row(yi), src.row_clamped(yi + 1), dst.row_mut(j), f, st);
        y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Keep;

    #[test]
    fn test_vertical_half() {
        let src = [0u8, 0, 100, 100, 200, 200, 250, 250];
        let mut dst = [0u8; 4];
        scale_vertical(
            SrcRows::new(&src, 2, 2, 4),
            &mut DstRows::new(&mut dst, 2, 2, 2),
            FilterMode::Bilinear,
            Keep::<u8>::new(),
        );
        assert_eq!(dst, [50, 50, 225, 225]);
    }

    #[test]
    fn test_vertical_point_rows() {
        let src = [0u8, 100, 200, 250];
        let mut dst = [0u8; 2];
        scale_vertical(
            SrcRows::new(&src, 1, 1, 4),
            &mut DstRows::new(&mut dst, 1, 1, 2),
            FilterMode::None,
            Keep::<u8>::new(),
        );
        // y starts at 0.5, truncated to rows 0 and 2
        assert_eq!(dst, [0, 200]);
    }

    #[test]
    fn test_vertical_grow_from_single_row() {
        let src = [7u16, 8, 9];
        let mut dst = [0u16; 9];
        scale_vertical(
            SrcRows::new(&src, 3, 3, 1),
            &mut DstRows::new(&mut dst, 3, 3, 3),
            FilterMode::Bilinear,
            Keep::<u16>::new(),
        );
        assert_eq!(dst, [7, 8, 9, 7, 8, 9, 7, 8, 9]);
    }
}
