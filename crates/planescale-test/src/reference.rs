//! Brute-force reference scalers
//!
//! Straightforward per-sample evaluations of the scaler formulas, used to
//! check the row kernels and fast paths. Speed is irrelevant here.

use planescale_core::{Plane, Sample};

/// Point sampling at pixel centers (`x = dx / 2`, `dx = (sw << 16) / dw`).
pub fn reference_point<T: Sample>(src: &Plane<T>, dst_width: u32, dst_height: u32) -> Plane<T> {
    let dx = ((src.width() as u64) << 16) / dst_width as u64;
    let dy = ((src.height() as u64) << 16) / dst_height as u64;
    let sample = |i: u32, d: u64| ((d >> 1) + i as u64 * d) >> 16;
    Plane::from_fn(dst_width, dst_height, |x, y| {
        src.row(sample(y, dy) as u32)[sample(x, dx) as usize]
    })
    .expect("reference plane dimensions must be non-zero")
}

/// Rounded mean of `count` summed samples.
fn mean(sum: u64, count: u64) -> u32 {
    ((sum + count / 2) / count) as u32
}

/// Sum of `src` over columns `x0..x1` and rows `y0..y1`.
fn block_sum<T: Sample>(src: &Plane<T>, x0: u32, x1: u32, y0: u32, y1: u32) -> u64 {
    (y0..y1)
        .map(|y| {
            let row = src.row(y);
            (x0..x1).map(|x| u64::from(row[x as usize].to_u32())).sum::<u64>()
        })
        .sum()
}

/// Area average onto `dst_width x dst_height`.
///
/// Box `i` spans `(i * dx) >> 16 .. ((i + 1) * dx) >> 16` with
/// `dx = (sw << 16) / dw`, at least one sample wide, and takes the
/// rounded mean.
pub fn reference_area<T: Sample>(src: &Plane<T>, dst_width: u32, dst_height: u32) -> Plane<T> {
    let dx = ((src.width() as u64) << 16) / dst_width as u64;
    let dy = ((src.height() as u64) << 16) / dst_height as u64;
    let max_y = (src.height() as u64) << 16;
    let span = |i: u32, d: u64, limit: u64| {
        let start = ((i as u64 * d).min(limit) >> 16) as u32;
        let end = (((i as u64 + 1) * d).min(limit) >> 16) as u32;
        (start, end.max(start + 1))
    };
    Plane::from_fn(dst_width, dst_height, |x, y| {
        let (x0, x1) = span(x, dx, u64::MAX);
        let (y0, y1) = span(y, dy, max_y);
        let count = u64::from((x1 - x0) * (y1 - y0));
        T::from_u32(mean(block_sum(src, x0, x1, y0, y1), count))
    })
    .expect("reference plane dimensions must be non-zero")
}

/// Area average over `factor x factor` blocks.
pub fn reference_box<T: Sample>(src: &Plane<T>, factor: u32) -> Plane<T> {
    reference_area(src, src.width() / factor, src.height() / factor)
}

/// Rounded 2x2 average, `(s0 + s1 + t0 + t1 + 2) >> 2`.
///
/// Odd sizes round the output up. The last row pairs with itself and an
/// unpaired last column averages its two rows.
pub fn reference_half<T: Sample>(src: &Plane<T>) -> Plane<T> {
    let (w, h) = (src.width(), src.height());
    Plane::from_fn(w.div_ceil(2), h.div_ceil(2), |x, y| {
        let (s, t) = (src.row(2 * y), src.row((2 * y + 1).min(h - 1)));
        let i = 2 * x as usize;
        if 2 * x + 1 == w {
            return T::from_u32((s[i].to_u32() + t[i].to_u32() + 1) >> 1);
        }
        let j = i + 1;
        T::from_u32((s[i].to_u32() + s[j].to_u32() + t[i].to_u32() + t[j].to_u32() + 2) >> 2)
    })
    .expect("reference plane dimensions must be non-zero")
}

/// 3/4 reduction: each group of four samples gives three, weighted
/// 3:1, 1:1 and 1:3 on both axes.
///
/// Rows `r..r + 4` of a group feed outputs from the row pairs
/// `(r, r + 1)`, `(r + 1, r + 2)` and `(r + 3, r + 2)`.
pub fn reference_three_quarters<T: Sample>(src: &Plane<T>) -> Plane<T> {
    let third = |row: &[T], x: u32| {
        let p = &row[4 * (x / 3) as usize..];
        let v = |k: usize| p[k].to_u32();
        match x % 3 {
            0 => (3 * v(0) + v(1) + 2) >> 2,
            1 => (v(1) + v(2) + 1) >> 1,
            _ => (v(2) + 3 * v(3) + 2) >> 2,
        }
    };
    Plane::from_fn(src.width() * 3 / 4, src.height() * 3 / 4, |x, y| {
        let r = 4 * (y / 3);
        let h = |row: u32| third(src.row(row), x);
        T::from_u32(match y % 3 {
            0 => (3 * h(r) + h(r + 1) + 2) >> 2,
            1 => (h(r + 1) + h(r + 2) + 1) >> 1,
            _ => (3 * h(r + 3) + h(r + 2) + 2) >> 2,
        })
    })
    .expect("reference plane dimensions must be non-zero")
}

/// Start and length of band `i` when groups of eight split 3, 3, 2.
fn three_eighths_band(i: u32) -> (u32, u32) {
    let start = 8 * (i / 3) + 3 * (i % 3);
    (start, if i % 3 == 2 { 2 } else { 3 })
}

/// 3/8 area average over bands of 3, 3 and 2 samples on both axes.
pub fn reference_three_eighths<T: Sample>(src: &Plane<T>) -> Plane<T> {
    Plane::from_fn(src.width() * 3 / 8, src.height() * 3 / 8, |x, y| {
        let (x0, bw) = three_eighths_band(x);
        let (y0, bh) = three_eighths_band(y);
        let sum = block_sum(src, x0, x0 + bw, y0, y0 + bh);
        T::from_u32(mean(sum, u64::from(bw * bh)))
    })
    .expect("reference plane dimensions must be non-zero")
}

/// 8-bit horizontal blend at 16-bit position fraction `f`, 7-bit weight.
fn blend8(a: u8, b: u8, f: u32) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));
    let f = (f >> 9) as i32;
    (a + ((f * (b - a) + 0x40) >> 7)) as u8
}

/// Filtered sample of `row` at 16.16 position `x`, right neighbour
/// clamped to the last column.
fn sample_at(row: &[u8], x: u64) -> u8 {
    let i = (x >> 16) as usize;
    blend8(row[i], row[(i + 1).min(row.len() - 1)], (x & 0xffff) as u32)
}

/// Filtered column positions for a reduction to `dst_width`:
/// `x = dx / 2 - 0.5 + i * dx`.
fn centered_axis(src: u32, dst: u32) -> (u64, u64) {
    let d = ((src as u64) << 16) / dst as u64;
    ((d >> 1) - 32768, d)
}

/// Horizontally filtered 8-bit reduction; rows are point sampled at
/// `dy / 2 + j * dy`.
pub fn reference_linear(src: &Plane<u8>, dst_width: u32, dst_height: u32) -> Plane<u8> {
    assert!(dst_width <= src.width() && dst_height <= src.height());
    let (x0, dx) = centered_axis(src.width(), dst_width);
    let dy = ((src.height() as u64) << 16) / dst_height as u64;
    let max_y = ((src.height() - 1) as u64) << 16;
    Plane::from_fn(dst_width, dst_height, |x, y| {
        let row = src.row((((dy >> 1) + y as u64 * dy).min(max_y) >> 16) as u32);
        sample_at(row, x0 + x as u64 * dx)
    })
    .expect("reference plane dimensions must be non-zero")
}

/// Bilinear 8-bit reduction: rows blend with an 8-bit fraction, then
/// columns blend as in [`reference_linear`].
pub fn reference_bilinear(src: &Plane<u8>, dst_width: u32, dst_height: u32) -> Plane<u8> {
    assert!(dst_width <= src.width() && dst_height <= src.height());
    let (x0, dx) = centered_axis(src.width(), dst_width);
    let (y0, dy) = centered_axis(src.height(), dst_height);
    let max_y = ((src.height() - 1) as u64) << 16;
    let last = src.height() - 1;
    let blended: Vec<Vec<u8>> = (0..dst_height)
        .map(|j| {
            let y = (y0 + j as u64 * dy).min(max_y);
            let yi = (y >> 16) as u32;
            let f = ((y >> 8) & 255) as u32;
            let (s, t) = (src.row(yi), src.row((yi + 1).min(last)));
            s.iter()
                .zip(t)
                .map(|(&a, &b)| ((u32::from(a) * (256 - f) + u32::from(b) * f + 128) >> 8) as u8)
                .collect()
        })
        .collect();
    Plane::from_fn(dst_width, dst_height, |x, y| {
        sample_at(&blended[y as usize], x0 + x as u64 * dx)
    })
    .expect("reference plane dimensions must be non-zero")
}

/// Source index pair `(near, far)` feeding output `i` of a 2x upsample
/// of `n` samples to `out` samples.
fn up2_taps(i: u32, out: u32, n: u32) -> (u32, u32) {
    if i == 0 {
        (0, 0)
    } else if i == out - 1 && out % 2 == 0 {
        (n - 1, n - 1)
    } else if i % 2 == 1 {
        let j = (i - 1) / 2;
        (j, (j + 1).min(n - 1))
    } else {
        let j = (i - 2) / 2;
        ((j + 1).min(n - 1), j)
    }
}

/// 2x horizontal upsample, 3:1 weights with copied edge columns.
pub fn reference_up2_linear<T: Sample>(src: &Plane<T>, dst_width: u32) -> Plane<T> {
    let sw = src.width();
    Plane::from_fn(dst_width, src.height(), |x, y| {
        let row = src.row(y);
        if x == 0 {
            return row[0];
        }
        if x == dst_width - 1 {
            return row[((dst_width - 1) / 2) as usize];
        }
        let (n, f) = up2_taps(x, dst_width, sw);
        T::from_u32((3 * row[n as usize].to_u32() + row[f as usize].to_u32() + 2) >> 2)
    })
    .expect("reference plane dimensions must be non-zero")
}

/// 2x upsample on both axes, 9:3:3:1 weights with 3:1 edge columns.
pub fn reference_up2_bilinear<T: Sample>(
    src: &Plane<T>,
    dst_width: u32,
    dst_height: u32,
) -> Plane<T> {
    let (sw, sh) = (src.width(), src.height());
    Plane::from_fn(dst_width, dst_height, |x, y| {
        let (rn, rf) = up2_taps(y, dst_height, sh);
        let (near, far) = (src.row(rn), src.row(rf));
        if x == 0 || x == dst_width - 1 {
            let c = if x == 0 { 0 } else { ((dst_width - 1) / 2) as usize };
            return T::from_u32((3 * near[c].to_u32() + far[c].to_u32() + 2) >> 2);
        }
        let (cn, cf) = up2_taps(x, dst_width, sw);
        let (cn, cf) = (cn as usize, cf as usize);
        T::from_u32(
            (9 * near[cn].to_u32() + 3 * near[cf].to_u32() + 3 * far[cn].to_u32()
                + far[cf].to_u32()
                + 8)
                >> 4,
        )
    })
    .expect("reference plane dimensions must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_keeps_centers() {
        let src = Plane::<u8>::from_fn(4, 4, |x, y| (x + 4 * y) as u8).unwrap();
        let half = reference_point(&src, 2, 2);
        assert_eq!(half.row(0), &[5, 7]);
        assert_eq!(half.row(1), &[13, 15]);
    }

    #[test]
    fn test_reference_box_matches_worked_example() {
        let src = Plane::<u8>::from_vec(
            4,
            4,
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150],
        )
        .unwrap();
        let half = reference_half(&src);
        assert_eq!(half.row(0), &[25, 45]);
        assert_eq!(half.row(1), &[105, 125]);
    }

    #[test]
    fn test_reference_half_odd_edges() {
        let src = Plane::<u8>::from_vec(3, 3, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]).unwrap();
        let half = reference_half(&src);
        assert_eq!(half.row(0), &[30, 45]);
        // last row pairs with itself
        assert_eq!(half.row(1), &[75, 90]);
    }

    #[test]
    fn test_reference_area_rounds() {
        let src = Plane::<u8>::from_vec(3, 3, vec![1, 2, 3, 10, 20, 30, 1, 2, 3]).unwrap();
        let one = reference_area(&src, 1, 1);
        // 72 / 9
        assert_eq!(one.row(0), &[8]);
        let src = Plane::<u8>::from_vec(2, 1, vec![1, 2]).unwrap();
        assert_eq!(reference_area(&src, 1, 1).row(0), &[2]);
    }

    #[test]
    fn test_three_eighths_bands() {
        assert_eq!(three_eighths_band(0), (0, 3));
        assert_eq!(three_eighths_band(1), (3, 3));
        assert_eq!(three_eighths_band(2), (6, 2));
        assert_eq!(three_eighths_band(4), (11, 3));
    }

    #[test]
    fn test_reference_bilinear_flat() {
        let src = Plane::<u8>::from_fn(9, 7, |_, _| 133).unwrap();
        let dst = reference_bilinear(&src, 5, 3);
        assert!(dst.rows().all(|r| r.iter().all(|&v| v == 133)));
    }

    #[test]
    fn test_up2_taps() {
        assert_eq!(up2_taps(0, 8, 4), (0, 0));
        assert_eq!(up2_taps(1, 8, 4), (0, 1));
        assert_eq!(up2_taps(2, 8, 4), (1, 0));
        assert_eq!(up2_taps(7, 8, 4), (3, 3));
    }
}
