//! Fixed-ratio reduction kernels
//!
//! Each kernel reads one to four source rows (`s`, `t`, ...) and writes
//! one destination row. Point kernels ignore the extra rows.

use crate::row::boxsum::average;
use crate::store::Store;
use planescale_core::Sample;

/// Kernel producing one row from two source rows.
pub type RowFn2<T, St> = fn(&[T], &[T], &mut [<St as Store>::Out], St);

#[inline]
fn v<T: Sample>(s: T) -> u32 {
    s.to_u32()
}

/// 1/2: keep the second sample of each pair.
pub fn down2_point<T: Sample, St: Store>(s: &[T], _t: &[T], dst: &mut [St::Out], st: St) {
    for (d, p) in dst.iter_mut().zip(s.chunks_exact(2)) {
        *d = st.put(v(p[1]));
    }
}

/// 1/2: average each horizontal pair.
pub fn down2_linear<T: Sample, St: Store>(s: &[T], _t: &[T], dst: &mut [St::Out], st: St) {
    for (d, p) in dst.iter_mut().zip(s.chunks_exact(2)) {
        *d = st.put((v(p[0]) + v(p[1]) + 1) >> 1);
    }
}

/// 1/2: rounded 2x2 average.
pub fn down2_box<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    for ((d, p), q) in dst.iter_mut().zip(s.chunks_exact(2)).zip(t.chunks_exact(2)) {
        *d = st.put((v(p[0]) + v(p[1]) + v(q[0]) + v(q[1]) + 2) >> 2);
    }
}

/// Odd source width: the last output sees a single source column.
pub fn down2_point_odd<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    if let Some((last, body)) = dst.split_last_mut() {
        down2_point(s, t, body, st);
        *last = st.put(v(s[2 * body.len()]));
    }
}

pub fn down2_linear_odd<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    if let Some((last, body)) = dst.split_last_mut() {
        down2_linear(s, t, body, st);
        *last = st.put(v(s[2 * body.len()]));
    }
}

pub fn down2_box_odd<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    if let Some((last, body)) = dst.split_last_mut() {
        down2_box(s, t, body, st);
        let i = 2 * body.len();
        *last = st.put((v(s[i]) + v(t[i]) + 1) >> 1);
    }
}

/// 1/4: third sample of each group of four.
pub fn down4_point<T: Sample, St: Store>(s: &[T], dst: &mut [St::Out], st: St) {
    for (d, p) in dst.iter_mut().zip(s.chunks_exact(4)) {
        *d = st.put(v(p[2]));
    }
}

/// 1/4: rounded 4x4 average.
pub fn down4_box<T: Sample, St: Store>(rows: [&[T]; 4], dst: &mut [St::Out], st: St) {
    for (i, d) in dst.iter_mut().enumerate() {
        let sum: u32 = rows
            .iter()
            .map(|r| r[4 * i..4 * i + 4].iter().map(|&x| v(x)).sum::<u32>())
            .sum();
        *d = st.put((sum + 8) >> 4);
    }
}

/// 3/4: samples 0, 1 and 3 of each group of four.
pub fn down34_point<T: Sample, St: Store>(s: &[T], _t: &[T], dst: &mut [St::Out], st: St) {
    debug_assert!(dst.len() % 3 == 0);
    for (d, p) in dst.chunks_exact_mut(3).zip(s.chunks_exact(4)) {
        d[0] = st.put(v(p[0]));
        d[1] = st.put(v(p[1]));
        d[2] = st.put(v(p[3]));
    }
}

/// Horizontal 3:1, 1:1, 1:3 averages of four samples.
#[inline]
fn third_weights<T: Sample>(p: &[T]) -> [u32; 3] {
    [
        (3 * v(p[0]) + v(p[1]) + 2) >> 2,
        (v(p[1]) + v(p[2]) + 1) >> 1,
        (v(p[2]) + 3 * v(p[3]) + 2) >> 2,
    ]
}

/// 3/4 box, row weighted 3:1 towards `s`.
pub fn down34_box0<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    debug_assert!(dst.len() % 3 == 0);
    for ((d, p), q) in dst.chunks_exact_mut(3).zip(s.chunks_exact(4)).zip(t.chunks_exact(4)) {
        let (a, b) = (third_weights(p), third_weights(q));
        for k in 0..3 {
            d[k] = st.put((3 * a[k] + b[k] + 2) >> 2);
        }
    }
}

/// 3/4 box, rows weighted 1:1.
pub fn down34_box1<T: Sample, St: Store>(s: &[T], t: &[T], dst: &mut [St::Out], st: St) {
    debug_assert!(dst.len() % 3 == 0);
    for ((d, p), q) in dst.chunks_exact_mut(3).zip(s.chunks_exact(4)).zip(t.chunks_exact(4)) {
        let (a, b) = (third_weights(p), third_weights(q));
        for k in 0..3 {
            d[k] = st.put((a[k] + b[k] + 1) >> 1);
        }
    }
}

/// 3/8: samples 1, 3 and 6 of each group of eight, the point-sampled
/// centers of its 3, 3 and 2 wide bands.
pub fn down38_point<T: Sample, St: Store>(s: &[T], dst: &mut [St::Out], st: St) {
    debug_assert!(dst.len() % 3 == 0);
    for (d, p) in dst.chunks_exact_mut(3).zip(s.chunks_exact(8)) {
        d[0] = st.put(v(p[1]));
        d[1] = st.put(v(p[3]));
        d[2] = st.put(v(p[6]));
    }
}

fn column_sum<T: Sample>(rows: &[&[T]], from: usize, to: usize) -> u64 {
    rows.iter()
        .map(|r| r[from..to].iter().map(|&x| u64::from(v(x))).sum::<u64>())
        .sum()
}

/// 3/8 area average over `rows` (three or two source rows).
///
/// Columns are split 3, 3, 2 and each sum takes the rounded mean used by
/// the general box filter.
pub fn down38_box<T: Sample, St: Store>(rows: &[&[T]], dst: &mut [St::Out], st: St) {
    debug_assert!(dst.len() % 3 == 0);
    debug_assert!(rows.len() == 2 || rows.len() == 3);
    let n = rows.len() as u64;
    for (k, d) in dst.chunks_exact_mut(3).enumerate() {
        let base = 8 * k;
        d[0] = st.put(average(column_sum(rows, base, base + 3), 3 * n));
        d[1] = st.put(average(column_sum(rows, base + 3, base + 6), 3 * n));
        d[2] = st.put(average(column_sum(rows, base + 6, base + 8), 2 * n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Keep, Narrow};

    fn keep8() -> Keep<u8> {
        Keep::new()
    }

    #[test]
    fn test_down2_kernels() {
        let s = [10u8, 20, 30, 40];
        let t = [50u8, 60, 70, 80];
        let mut d = [0u8; 2];
        down2_point(&s, &t, &mut d, keep8());
        assert_eq!(d, [20, 40]);
        down2_linear(&s, &t, &mut d, keep8());
        assert_eq!(d, [15, 35]);
        down2_box(&s, &t, &mut d, keep8());
        assert_eq!(d, [35, 55]);
    }

    #[test]
    fn test_down2_odd_kernels() {
        let s = [100u16, 200, 300, 400, 500];
        let t = [300u16, 400, 500, 600, 700];
        let st = Narrow::new(256).unwrap();
        let mut d = [0u8; 3];
        down2_point_odd(&s, &t, &mut d, st);
        assert_eq!(d, [0, 1, 1]);
        down2_box_odd(&s, &t, &mut d, st);
        // 250, 450, 600 narrowed by 256
        assert_eq!(d, [0, 1, 2]);

        let mut one = [0u8; 1];
        down2_linear_odd(&[1000u16], &[1000u16], &mut one, st);
        assert_eq!(one, [3]);
    }

    #[test]
    fn test_down4_kernels() {
        let row: Vec<u8> = (0..8).map(|x| x * 10).collect();
        let mut d = [0u8; 2];
        down4_point(&row, &mut d, keep8());
        assert_eq!(d, [20, 60]);
        down4_box([&row, &row, &row, &row], &mut d, keep8());
        // (0+10+20+30)*4 = 240 -> (240+8)>>4 = 15
        assert_eq!(d, [15, 55]);
    }

    #[test]
    fn test_down34_kernels() {
        let s = [0u8, 40, 80, 120];
        let t = [40u8, 80, 120, 160];
        let mut d = [0u8; 3];
        down34_point(&s, &t, &mut d, keep8());
        assert_eq!(d, [0, 40, 120]);
        // a = [10, 60, 110], b = [50, 100, 150]
        down34_box0(&s, &t, &mut d, keep8());
        assert_eq!(d, [20, 70, 120]);
        down34_box1(&s, &t, &mut d, keep8());
        assert_eq!(d, [30, 80, 130]);
    }

    #[test]
    fn test_down38_kernels() {
        let row = [9u8, 9, 9, 18, 18, 18, 30, 30];
        let mut d = [0u8; 3];
        down38_point(&row, &mut d, keep8());
        assert_eq!(d, [9, 18, 30]);
        down38_box(&[&row, &row, &row], &mut d, keep8());
        assert_eq!(d, [9, 18, 30]);
        let low = [1u8, 1, 2, 0, 0, 1, 3, 4];
        down38_box(&[&low, &low], &mut d, keep8());
        // 8 / 6, 2 / 6 and 14 / 4, rounded
        assert_eq!(d, [1, 0, 4]);
    }

    #[test]
    fn test_down38_box_16_does_not_overflow() {
        let row = [u16::MAX; 8];
        let mut d = [0u16; 3];
        down38_box(&[&row, &row, &row], &mut d, Keep::<u16>::new());
        assert_eq!(d, [u16::MAX; 3]);
    }
}
