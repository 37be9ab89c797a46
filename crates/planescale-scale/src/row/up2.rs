//! Exact 2x upsampling kernels
//!
//! Output samples sit a quarter pixel either side of each source sample.
//! The first column copies the first source sample and, for even output
//! widths, the last column copies the last one.

use crate::store::Store;
use planescale_core::Sample;

/// Horizontal 2x with 3:1 weights.
pub fn up2_linear_row<T: Sample, St: Store>(src: &[T], dst: &mut [St::Out], st: St) {
    let Some(last) = dst.len().checked_sub(1) else {
        return;
    };
    let work = last & !1;
    dst[0] = st.put(src[0].to_u32());
    for (x, d) in dst[1..1 + work].chunks_exact_mut(2).enumerate() {
        let (a, b) = (src[x].to_u32(), src[x + 1].to_u32());
        d[0] = st.put((3 * a + b + 2) >> 2);
        d[1] = st.put((a + 3 * b + 2) >> 2);
    }
    dst[last] = st.put(src[last / 2].to_u32());
}

/// One output row of a 2x bilinear upsample.
///
/// `near` is the source row closest to the output row, `far` the other
/// one; interior samples weigh them 9:3:3:1.
pub fn up2_bilinear_row<T: Sample, St: Store>(
    near: &[T],
    far: &[T],
    dst: &mut [St::Out],
    st: St,
) {
    let Some(last) = dst.len().checked_sub(1) else {
        return;
    };
    let work = last & !1;
    let edge = |c: usize| (3 * near[c].to_u32() + far[c].to_u32() + 2) >> 2;
    dst[0] = st.put(edge(0));
    for (x, d) in dst[1..1 + work].chunks_exact_mut(2).enumerate() {
        let (n0, n1) = (near[x].to_u32(), near[x + 1].to_u32());
        let (f0, f1) = (far[x].to_u32(), far[x + 1].to_u32());
        d[0] = st.put((9 * n0 + 3 * n1 + 3 * f0 + f1 + 8) >> 4);
        d[1] = st.put((3 * n0 + 9 * n1 + f0 + 3 * f1 + 8) >> 4);
    }
    dst[last] = st.put(edge(last / 2));
}
