//! Exact 2x enlargements

use crate::cursor::{DstRows, SrcRows};
use crate::fixed::fixed_div;
use crate::row::up2;
use crate::store::Store;
use planescale_core::Sample;

/// Double the width with linear filtering; rows are point sampled.
pub fn up2_linear<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    st: St,
) {
    debug_assert!(dst.width().div_ceil(2) == src.width());
    let (sh, dh) = (src.height() as i64, dst.height() as i64);

    if dh == 1 {
        up2::up2_linear_row(src.row(((sh - 1) / 2) as usize), dst.row_mut(0), st);
        return;
    }
    let dy = fixed_div(sh - 1, dh - 1);
    let mut y: i64 = (1 << 15) - 1;
    for j in 0..dst.height() {
        up2::up2_linear_row(src.row((y >> 16) as usize), dst.row_mut(j), st);
        y += dy;
    }
}

/// Double both axes with bilinear filtering.
///
/// The first row uses the first source row alone; so does the last row
/// when the output height is even.
pub fn up2_bilinear<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    st: St,
) {
    debug_assert!(dst.width().div_ceil(2) == src.width());
    debug_assert!(dst.height().div_ceil(2) == src.height());

    let first = src.row(0);
    up2::up2_bilinear_row(first, first, dst.row_mut(0), st);
    for i in 0..src.height() - 1 {
        let (s, t) = (src.row(i), src.row(i + 1));
        up2::up2_bilinear_row(s, t, dst.row_mut(2 * i + 1), st);
        up2::up2_bilinear_row(t, s, dst.row_mut(2 * i + 2), st);
    }
    if dst.height() % 2 == 0 {
        let last = src.row(src.height() - 1);
        up2::up2_bilinear_row(last, last, dst.row_mut(dst.height() - 1), st);
    }
}
