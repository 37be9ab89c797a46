//! Box filter for arbitrary reductions
//!
//! Each output row sums a band of whole source rows into an accumulator
//! row, then averages runs of accumulated columns.

use crate::cursor::{DstRows, SrcRows};
use crate::error::ScaleResult;
use crate::row::boxsum::{self, Accum, BoxColsFn};
use crate::slope::{ScaleStep, scale_slope};
use crate::store::{ScaleSample, Store};
use log::trace;
use planescale_core::{FilterMode, try_filled_vec};

/// Area-average `src` into `dst`.
///
/// `mirror` reverses the columns of the result's source; the box is
/// computed on the unmirrored step and the accumulated row is reversed.
pub fn scale_box<T: ScaleSample, St: Store>(
    src: SrcRows<'_, T>,
    mirror: bool,
    dst: &mut DstRows<'_, St::Out>,
    st: St,
) -> ScaleResult<()> {
    let step = scale_slope(
        src.width() as i32,
        src.height() as i32,
        dst.width() as i32,
        dst.height() as i32,
        FilterMode::Box,
    );

    // Tallest band this step can produce
    let rows = ((step.dy >> 16) + 1) as u64;
    let peak = u64::from(T::MAX.to_u32()) * rows;
    trace!("box accumulator: {} rows of {} columns, peak {}", rows, src.width(), peak);
    if peak <= u64::from(u16::MAX) {
        box_with::<T, u16, St>(src, mirror, dst, step, st)
    } else if peak <= u64::from(u32::MAX) {
        box_with::<T, u32, St>(src, mirror, dst, step, st)
    } else {
        box_with::<T, u64, St>(src, mirror, dst, step, st)
    }
}

fn box_with<T: ScaleSample, A: Accum, St: Store>(
    src: SrcRows<'_, T>,
    mirror: bool,
    dst: &mut DstRows<'_, St::Out>,
    step: ScaleStep,
    st: St,
) -> ScaleResult<()> {
    let mut acc: Vec<A> = try_filled_vec(src.width(), A::default())?;
    let cols: BoxColsFn<A, St> = if step.dx & 0xffff != 0 {
        boxsum::box_cols2
    } else {
        boxsum::box_cols1
    };
    let max_y = (src.height() as i64) << 16;

    let mut y = step.y;
    for j in 0..dst.height() {
        let iy = y >> 16;
        y = (y + step.dy).min(max_y);
        let box_height = ((y >> 16) - iy).max(1);

        acc.fill(A::default());
        for k in 0..box_height {
            boxsum::add_row(src.row((iy + k) as usize), &mut acc);
        }
        if mirror {
            acc.reverse();
        }
        cols(&acc, dst.row_mut(j), box_height, step.x, step.dx, st);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::down::{down2, down4};
    use crate::store::Keep;

    #[test]
    fn test_box_three_by_three() {
        // 6x3 -> 2x1, each output averages a 3x3 block
        let src = [1u8, 2, 3, 10, 20, 30, 1, 2, 3, 10, 20, 30, 1, 2, 3, 10, 20, 30];
        let mut dst = [0u8; 2];
        scale_box(
            SrcRows::new(&src, 6, 6, 3),
            false,
            &mut DstRows::new(&mut dst, 2, 2, 1),
            Keep::new(),
        )
        .unwrap();
        // 18 / 9 and 180 / 9
        assert_eq!(dst, [2, 20]);
    }

    #[test]
    fn test_box_mirror_reverses_columns() {
        let src: Vec<u16> = (0..24).map(|i| (i % 6) * 100).collect();
        let mut plain = [0u16; 2];
        let mut mirrored = [0u16; 2];
        let rows = SrcRows::new(&src, 6, 6, 4);
        scale_box(rows, false, &mut DstRows::new(&mut plain, 2, 2, 1), Keep::new()).unwrap();
        scale_box(rows, true, &mut DstRows::new(&mut mirrored, 2, 2, 1), Keep::new()).unwrap();
        assert_eq!(mirrored, [plain[1], plain[0]]);
    }

    #[test]
    fn test_box_tall_band_uses_wide_accumulator() {
        // 300 rows into 1: a u16 accumulator would overflow on 255s
        let src = vec![255u8; 3 * 300];
        let mut dst = [0u8; 1];
        scale_box(
            SrcRows::new(&src, 3, 3, 300),
            false,
            &mut DstRows::new(&mut dst, 1, 1, 1),
            Keep::new(),
        )
        .unwrap();
        assert_eq!(dst[0], 255);
    }

    #[test]
    fn test_box_matches_half_and_quarter_paths() {
        let src: Vec<u8> = (0..64 * 64u32).map(|i| (i * 7919 % 251) as u8).collect();
        for factor in [2, 4] {
            let n = 64 / factor;
            let mut generic = vec![0u8; n * n];
            let mut fast = vec![0u8; n * n];
            scale_box(
                SrcRows::new(&src, 64, 64, 64),
                false,
                &mut DstRows::new(&mut generic, n, n, n),
                Keep::<u8>::new(),
            )
            .unwrap();
            let rows = SrcRows::new(&src, 64, 64, 64);
            let mut dst = DstRows::new(&mut fast, n, n, n);
            if factor == 2 {
                down2(rows, &mut dst, FilterMode::Box, Keep::<u8>::new());
            } else {
                down4(rows, &mut dst, FilterMode::Box, Keep::<u8>::new());
            }
            assert_eq!(generic, fast, "1/{factor}");
        }
    }
}
