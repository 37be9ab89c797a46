//! Fixed-ratio reductions: 1/2, 1/4, 3/4 and 3/8

use crate::cursor::{DstRows, SrcRows};
use crate::row::down::{self, RowFn2};
use crate::store::Store;
use planescale_core::{FilterMode, Sample};

/// Halve both axes.
///
/// Odd source sizes are accepted: the last column averages a single
/// source column, and an odd last row is paired with itself.
pub fn down2<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) {
    debug_assert!(dst.width() == src.width().div_ceil(2));
    debug_assert!(dst.height() == src.height().div_ceil(2));

    let odd = src.width() % 2 == 1;
    let kernel: RowFn2<T, St> = match (filter, odd) {
        (FilterMode::None, false) => down::down2_point,
        (FilterMode::None, true) => down::down2_point_odd,
        (FilterMode::Linear, false) => down::down2_linear,
        (FilterMode::Linear, true) => down::down2_linear_odd,
        (_, false) => down::down2_box,
        (_, true) => down::down2_box_odd,
    };
    // Point sampling reads odd rows; the box pairs each row with the next
    let (first, second) = match filter {
        FilterMode::None => (1, 1),
        FilterMode::Linear => (0, 0),
        _ => (0, 1),
    };

    let pairs = src.height() / 2;
    for y in 0..pairs {
        kernel(src.row(2 * y + first), src.row(2 * y + second), dst.row_mut(y), st);
    }
    if src.height() % 2 == 1 {
        let last = src.row(src.height() - 1);
        kernel(last, last, dst.row_mut(pairs), st);
    }
}

/// Quarter both axes.
pub fn down4<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) {
    debug_assert!(4 * dst.width() == src.width() && 4 * dst.height() == src.height());
    if filter.is_filtering() {
        // Linear has no vertical extent
        let fs = usize::from(filter != FilterMode::Linear);
        for y in 0..dst.height() {
            let r = 4 * y;
            let rows = [src.row(r), src.row(r + fs), src.row(r + 2 * fs), src.row(r + 3 * fs)];
            down::down4_box(rows, dst.row_mut(y), st);
        }
    } else {
        for y in 0..dst.height() {
            down::down4_point(src.row(4 * y + 2), dst.row_mut(y), st);
        }
    }
}

/// Three quarters on both axes: four source rows give three output rows.
pub fn down34<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) {
    debug_assert!(4 * dst.width() == 3 * src.width() && 4 * dst.height() == 3 * src.height());
    let (row0, row1): (RowFn2<T, St>, RowFn2<T, St>) = if filter.is_filtering() {
        (down::down34_box0, down::down34_box1)
    } else {
        (down::down34_point, down::down34_point)
    };
    let fs = usize::from(filter != FilterMode::Linear);
    let dh = dst.height();

    let mut r = 0;
    let mut y = 0;
    while y + 2 < dh {
        row0(src.row(r), src.row(r + fs), dst.row_mut(y), st);
        row1(src.row(r + 1), src.row(r + 1 + fs), dst.row_mut(y + 1), st);
        row0(src.row(r + 3), src.row(r + 3 - fs), dst.row_mut(y + 2), st);
        r += 4;
        y += 3;
    }
    // Remainder rows are not blended with rows below them
    match dh - y {
        2 => {
            row0(src.row(r), src.row_clamped(r + fs), dst.row_mut(y), st);
            let s = src.row_clamped(r + 1);
            row1(s, s, dst.row_mut(y + 1), st);
        }
        1 => row0(src.row(r), src.row(r), dst.row_mut(y), st),
        _ => {}
    }
}

/// Three eighths on both axes: eight source rows give three output rows
/// from bands of 3, 3 and 2 rows.
///
/// Point sampling reads rows 1, 3 and 6 of each group, the same rows the
/// general point sampler picks at this ratio.
pub fn down38<T: Sample, St: Store>(
    src: SrcRows<'_, T>,
    dst: &mut DstRows<'_, St::Out>,
    filter: FilterMode,
    st: St,
) {
    debug_assert!(8 * dst.width() == 3 * src.width() && 8 * dst.height() == 3 * src.height());
    if !filter.is_filtering() {
        for y in 0..dst.height() {
            let r = 8 * (y / 3) + [1, 3, 6][y % 3];
            down::down38_point(src.row_clamped(r), dst.row_mut(y), st);
        }
        return;
    }

    let fs = usize::from(filter != FilterMode::Linear);
    let dh = dst.height();
    let band3 = |r: usize, fs: usize| {
        [src.row_clamped(r), src.row_clamped(r + fs), src.row_clamped(r + 2 * fs)]
    };

    let mut r = 0;
    let mut y = 0;
    while y + 2 < dh {
        down::down38_box(&band3(r, fs), dst.row_mut(y), st);
        down::down38_box(&band3(r + 3, fs), dst.row_mut(y + 1), st);
        down::down38_box(&[src.row(r + 6), src.row(r + 6 + fs)], dst.row_mut(y + 2), st);
        r += 8;
        y += 3;
    }
    match dh - y {
        2 => {
            down::down38_box(&band3(r, fs), dst.row_mut(y), st);
            down::down38_box(&band3(r + 3, 0), dst.row_mut(y + 1), st);
        }
        1 => down::down38_box(&band3(r, 0), dst.row_mut(y), st),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Keep, Narrow};

    fn ramp(w: usize, h: usize) -> Vec<u8> {
        (0..w * h).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn test_down2_point_reads_odd_rows() {
        let src = ramp(4, 4);
        let mut dst = [0u8; 4];
        down2(
            SrcRows::new(&src, 4, 4, 4),
            &mut DstRows::new(&mut dst, 2, 2, 2),
            FilterMode::None,
            Keep::new(),
        );
        assert_eq!(dst, [src[5], src[7], src[13], src[15]]);
    }

    #[test]
    fn test_down2_odd_height_point_uses_last_row() {
        let src: Vec<u16> = (0..9).map(|i| i * 256).collect();
        let mut dst = [0u8; 4];
        down2(
            SrcRows::new(&src, 3, 3, 3),
            &mut DstRows::new(&mut dst, 2, 2, 2),
            FilterMode::None,
            Narrow::new(256).unwrap(),
        );
        // rows 1 and 2, columns 1 and 2
        assert_eq!(dst, [4, 5, 7, 8]);
    }

    #[test]
    fn test_down4_point() {
        let src = ramp(8, 8);
        let mut dst = [0u8; 4];
        down4(
            SrcRows::new(&src, 8, 8, 8),
            &mut DstRows::new(&mut dst, 2, 2, 2),
            FilterMode::None,
            Keep::new(),
        );
        assert_eq!(dst, [src[18], src[22], src[50], src[54]]);
    }

    #[test]
    fn test_down34_flat() {
        let src = [77u8; 64];
        let mut dst = [0u8; 36];
        for filter in FilterMode::ALL {
            down34(
                SrcRows::new(&src, 8, 8, 8),
                &mut DstRows::new(&mut dst, 6, 6, 6),
                filter,
                Keep::new(),
            );
            assert!(dst.iter().all(|&v| v == 77), "{filter}");
        }
    }

    #[test]
    fn test_down38_point_rows() {
        let src: Vec<u8> = (0..64).collect();
        let mut dst = [0u8; 9];
        down38(
            SrcRows::new(&src, 8, 8, 8),
            &mut DstRows::new(&mut dst, 3, 3, 3),
            FilterMode::None,
            Keep::new(),
        );
        assert_eq!(dst, [9, 11, 14, 25, 27, 30, 49, 51, 54]);
    }
}
