//! Row accumulation and box column averaging

use crate::store::Store;
use planescale_core::Sample;

/// Column accumulator for box filtering.
///
/// The narrowest type that cannot overflow for the box height in use is
/// chosen per call.
pub trait Accum: Copy + Default {
    fn add(self, v: u32) -> Self;
    fn get(self) -> u64;
}

impl Accum for u16 {
    #[inline]
    fn add(self, v: u32) -> Self {
        self + v as u16
    }
    #[inline]
    fn get(self) -> u64 {
        u64::from(self)
    }
}

impl Accum for u32 {
    #[inline]
    fn add(self, v: u32) -> Self {
        self + v
    }
    #[inline]
    fn get(self) -> u64 {
        u64::from(self)
    }
}

impl Accum for u64 {
    #[inline]
    fn add(self, v: u32) -> Self {
        self + u64::from(v)
    }
    #[inline]
    fn get(self) -> u64 {
        self
    }
}

/// Add one source row into the accumulator row.
pub fn add_row<T: Sample, A: Accum>(src: &[T], acc: &mut [A]) {
    for (a, &s) in acc.iter_mut().zip(src) {
        *a = a.add(s.to_u32());
    }
}

#[inline]
fn sum<A: Accum>(acc: &[A]) -> u64 {
    acc.iter().map(|a| a.get()).sum()
}

#[inline]
fn min1(v: i64) -> i64 {
    v.max(1)
}

/// Rounded mean of `count` accumulated samples.
///
/// Matches the fixed-ratio kernels, so `(s + 2) >> 2` for a 2x2 box.
#[inline]
pub fn average(sum: u64, count: u64) -> u32 {
    ((sum + count / 2) / count) as u32
}

/// Average boxes of varying width (`dx` has a fractional part).
///
/// Widths are `dx >> 16` or one more.
pub fn box_cols2<A: Accum, St: Store>(
    acc: &[A],
    dst: &mut [St::Out],
    box_height: i64,
    x: i64,
    dx: i64,
    st: St,
) {
    let min_width = dx >> 16;
    let mut x = x;
    for d in dst.iter_mut() {
        let ix = x >> 16;
        x += dx;
        let width = min1((x >> 16) - ix);
        debug_assert!(width - min_width < 2);
        let (ix, width) = (ix as usize, width as usize);
        let count = (width as i64 * box_height) as u64;
        *d = st.put(average(sum(&acc[ix..ix + width]), count));
    }
}

/// Average boxes of constant integer width.
pub fn box_cols1<A: Accum, St: Store>(
    acc: &[A],
    dst: &mut [St::Out],
    box_height: i64,
    x: i64,
    dx: i64,
    st: St,
) {
    let width = min1(dx >> 16);
    let count = (width * box_height) as u64;
    let width = width as usize;
    let start = (x >> 16) as usize;
    for (d, block) in dst.iter_mut().zip(acc[start..].chunks_exact(width)) {
        *d = st.put(average(sum(block), count));
    }
}

/// Box column averager signature.
pub type BoxColsFn<A, St> = fn(&[A], &mut [<St as Store>::Out], i64, i64, i64, St);
