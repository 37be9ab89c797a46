//! Filtered scaling for arbitrary ratios

use crate::cursor::{DstRows, SrcRows};
use crate::error::ScaleResult;
use crate::row::cols::{self, ColsFn};
use crate::slope::scale_slope;
use crate::store::{Keep, ScaleSample, Store};
use planescale_core::{FilterMode, try_filled_vec};

/// Vertical reduction (or no vertical change) with filtered columns.
///
/// Each output row blends two source rows into a scratch row, then
/// filters columns out of it. Linear skips the vertical blend.
pub fn bilinear_down<T: ScaleSample, St: Store>(
    src: SrcRows<'_, T>,
    src_width: i32,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) -> ScaleResult<()> {
    let step = scale_slope(
        src_width,
        src.height() as i32,
        dst.width() as i32,
        dst.height() as i32,
        filter,
    );
    let max_y = (src.height() as i64 - 1) << 16;
    let mut row: Vec<T> = try_filled_vec(src.width(), T::default())?;

    let mut y = step.y.min(max_y);
    for j in 0..dst.height() {
        let yi = (y >> 16) as usize;
        if filter == FilterMode::Linear {
            cols::cols_filter(src.row(yi), dst.row_mut(j), step.x, step.dx, st);
        } else {
            let f = ((y >> 8) & 255) as u32;
            cols::interpolate_row(src.row(yi), src.row_clamped(yi + 1), &mut row, f, Keep::<T>::new());
            cols::cols_filter(&row, dst.row_mut(j), step.x, step.dx, st);
        }
        y = (y + step.dy).min(max_y);
    }
    Ok(())
}

/// Vertical enlargement with filtered columns.
///
/// Two horizontally scaled rows are kept; a new one is computed only
/// when the integer source row advances, and output rows blend the pair.
pub fn bilinear_up<T: ScaleSample, St: Store>(
    src: SrcRows<'_, T>,
    src_width: i32,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) -> ScaleResult<()> {
    let (sh, dw) = (src.height(), dst.width());
    let step = scale_slope(src_width, sh as i32, dw as i32, dst.height() as i32, filter);
    let max_y = (sh as i64 - 1) << 16;

    debug_assert!(filter.is_filtering());
    let columns: ColsFn<T, Keep<T>> = cols::cols_filter;

    let keep = Keep::<T>::new();
    let mut rows: [Vec<T>; 2] = [
        try_filled_vec(dw, T::default())?,
        try_filled_vec(dw, T::default())?,
    ];
    let (x, dx) = (step.x, step.dx);

    let mut y = step.y.min(max_y);
    let mut yi = (y >> 16) as usize;
    let mut src_row = yi;
    columns(src.row_clamped(src_row), &mut rows[0], x, dx, keep);
    if sh > 1 {
        src_row += 1;
    }
    columns(src.row_clamped(src_row), &mut rows[1], x, dx, keep);
    if sh > 2 {
        src_row += 1;
    }
    let mut last_y = yi;
    let mut top = 0;

    for j in 0..dst.height() {
        yi = (y >> 16) as usize;
        if yi != last_y {
            if y > max_y {
                y = max_y;
                yi = (y >> 16) as usize;
                src_row = yi;
            }
            if yi != last_y {
                columns(src.row_clamped(src_row), &mut rows[top], x, dx, keep);
                top ^= 1;
                last_y = yi;
                if y + 65536 < max_y {
                    src_row += 1;
                }
            }
        }
        let out = dst.row_mut(j);
        if filter == FilterMode::Linear {
            cols::interpolate_row(&rows[top], &rows[top], out, 0, st);
        } else {
            let f = ((y >> 8) & 255) as u32;
            cols::interpolate_row(&rows[top], &rows[top ^ 1], out, f, st);
        }
        y += step.dy;
    }
    Ok(())
}
