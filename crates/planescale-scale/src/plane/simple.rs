//! Point sampling

use crate::cursor::{DstRows, SrcRows};
use crate::row::cols::{self, ColsFn};
use crate::slope::scale_slope;
use crate::store::Store;
use planescale_core::{FilterMode, Sample};

/// Nearest-sample scaling at pixel centers.
pub fn scale_simple<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    src_width: i32,
    dst: &mut DstRows<'_, St::Out>,
    st: St,
) {
    let step = scale_slope(
        src_width,
        src.height() as i32,
        dst.width() as i32,
        dst.height() as i32,
        FilterMode::None,
    );
    let columns: ColsFn<T, St> = if src.width() * 2 == dst.width() && step.x < 0x8000 {
        cols::cols_up2
    } else {
        cols::cols_point
    };

    let mut y = step.y;
    for j in 0..dst.height() {
        columns(src.row((y >> 16) as usize), dst.row_mut(j), step.x, step.dx, st);
        y += step.dy;
    }
}
