//! Column samplers and vertical row blending

use crate::store::{ScaleSample, Store};
use planescale_core::Sample;

/// Point-sample `dst.len()` columns from `x`, stepping `dx` (16.16).
pub fn cols_point<T: Sample, St: Store>(
    src: &[T],
    dst: &mut [St::Out],
    x: i64,
    dx: i64,
    st: St,
) {
    let mut x = x;
    let mut take = || {
        let v = src[(x >> 16) as usize].to_u32();
        x += dx;
        v
    };
    let mut pairs = dst.chunks_exact_mut(2);
    for d in &mut pairs {
        d[0] = st.put(take());
        d[1] = st.put(take());
    }
    if let [d] = pairs.into_remainder() {
        *d = st.put(take());
    }
}

/// Exact 2x point upsample: every source sample written twice.
pub fn cols_up2<T: Sample, St: Store>(src: &[T], dst: &mut [St::Out], _x: i64, _dx: i64, st: St) {
    let tail = src.get(dst.len() / 2).copied();
    let mut pairs = dst.chunks_exact_mut(2);
    for (d, &s) in (&mut pairs).zip(src) {
        let v = st.put(s.to_u32());
        d[0] = v;
        d[1] = v;
    }
    if let ([d], Some(s)) = (pairs.into_remainder(), tail) {
        *d = st.put(s.to_u32());
    }
}

/// Linear blend between neighbouring columns.
///
/// The right neighbour is clamped to the last column, so a position on
/// the last sample reads it twice instead of running past the row.
pub fn cols_filter<T: ScaleSample, St: Store>(
    src: &[T],
    dst: &mut [St::Out],
    x: i64,
    dx: i64,
    st: St,
) {
    let last = src.len() - 1;
    let mut x = x;
    for d in dst.iter_mut() {
        let xi = (x >> 16) as usize;
        let a = src[xi].to_u32();
        let b = src[(xi + 1).min(last)].to_u32();
        *d = st.put(T::blend(a, b, (x & 0xffff) as u32));
        x += dx;
    }
}

/// Column sampler signature shared by the point and filtered variants.
pub type ColsFn<T, St> = fn(&[T], &mut [<St as Store>::Out], i64, i64, St);

/// Vertical blend of rows `s` and `t` with 8-bit fraction `f` (0..256).
pub fn interpolate_row<T: Sample, St: Store>(
    s: &[T],
    t: &[T],
    dst: &mut [St::Out],
    f: u32,
    st: St,
) {
    debug_assert!(f < 256);
    match f {
        0 => {
            for (d, &a) in dst.iter_mut().zip(s) {
                *d = st.put(a.to_u32());
            }
        }
        128 => {
            for ((d, &a), &b) in dst.iter_mut().zip(s).zip(t) {
                *d = st.put((a.to_u32() + b.to_u32() + 1) >> 1);
            }
        }
        _ => {
            let f0 = 256 - f;
            for ((d, &a), &b) in dst.iter_mut().zip(s).zip(t) {
                *d = st.put((a.to_u32() * f0 + b.to_u32() * f + 128) >> 8);
            }
        }
    }
}
