//! Interleaved pixel kernels
//!
//! `C` is the number of channels per pixel: 2 for UV, 4 for ARGB. Widths
//! passed in are sample counts (`pixels * C`).

use planescale_core::Sample;

/// 1/2: keep the second pixel of each pair.
pub fn down2_point<const C: usize>(s: &[u8], _t: &[u8], dst: &mut [u8]) {
    for (d, p) in dst.chunks_exact_mut(C).zip(s.chunks_exact(2 * C)) {
        d.copy_from_slice(&p[C..]);
    }
}

/// 1/2: average horizontal pixel pairs.
pub fn down2_linear<const C: usize>(s: &[u8], _t: &[u8], dst: &mut [u8]) {
    for (d, p) in dst.chunks_exact_mut(C).zip(s.chunks_exact(2 * C)) {
        for c in 0..C {
            d[c] = ((u32::from(p[c]) + u32::from(p[C + c]) + 1) >> 1) as u8;
        }
    }
}

/// 1/2: rounded 2x2 average per channel.
pub fn down2_box<const C: usize>(s: &[u8], t: &[u8], dst: &mut [u8]) {
    for ((d, p), q) in dst
        .chunks_exact_mut(C)
        .zip(s.chunks_exact(2 * C))
        .zip(t.chunks_exact(2 * C))
    {
        for c in 0..C {
            let sum = u32::from(p[c]) + u32::from(p[C + c]) + u32::from(q[c]) + u32::from(q[C + c]);
            d[c] = ((sum + 2) >> 2) as u8;
        }
    }
}

/// Integer reduction: every `step`-th pixel.
pub fn down_even_point<const C: usize>(s: &[u8], _t: &[u8], step: usize, dst: &mut [u8]) {
    for (k, d) in dst.chunks_exact_mut(C).enumerate() {
        let i = k * step * C;
        d.copy_from_slice(&s[i..i + C]);
    }
}

/// Integer reduction: 2x2 average at every `step`-th pixel.
pub fn down_even_box<const C: usize>(s: &[u8], t: &[u8], step: usize, dst: &mut [u8]) {
    for (k, d) in dst.chunks_exact_mut(C).enumerate() {
        let i = k * step * C;
        for c in 0..C {
            let sum = u32::from(s[i + c])
                + u32::from(s[i + C + c])
                + u32::from(t[i + c])
                + u32::from(t[i + C + c]);
            d[c] = ((sum + 2) >> 2) as u8;
        }
    }
}

/// Point-sample pixels from `x`, stepping `dx` (16.16 pixels).
///
/// Positions are 64-bit, so sources wider than 32767 pixels are safe.
pub fn cols<const C: usize>(src: &[u8], dst: &mut [u8], x: i64, dx: i64) {
    let mut x = x;
    for d in dst.chunks_exact_mut(C) {
        let i = (x >> 16) as usize * C;
        d.copy_from_slice(&src[i..i + C]);
        x += dx;
    }
}

/// Exact 2x: every source pixel written twice.
pub fn cols_up2<const C: usize>(src: &[u8], dst: &mut [u8], _x: i64, _dx: i64) {
    for (k, d) in dst.chunks_exact_mut(C).enumerate() {
        let i = (k / 2) * C;
        d.copy_from_slice(&src[i..i + C]);
    }
}

/// Filtered pixels with the 7-bit blender `(a * (0x7f ^ f) + b * f) >> 7`.
pub fn filter_cols<const C: usize>(src: &[u8], dst: &mut [u8], x: i64, dx: i64) {
    let last = src.len() / C - 1;
    let mut x = x;
    for d in dst.chunks_exact_mut(C) {
        let xi = (x >> 16) as usize;
        let f = ((x >> 9) & 0x7f) as u32;
        let (a, b) = (xi * C, (xi + 1).min(last) * C);
        for c in 0..C {
            d[c] = ((u32::from(src[a + c]) * (0x7f ^ f) + u32::from(src[b + c]) * f) >> 7) as u8;
        }
        x += dx;
    }
}

/// Packed column sampler signature.
pub type PackedColsFn = fn(&[u8], &mut [u8], i64, i64);

/// Horizontal 2x with 3:1 weights, per channel.
pub fn up2_linear<T: Sample, const C: usize>(src: &[T], dst: &mut [T]) {
    let pixels = dst.len() / C;
    let Some(last) = pixels.checked_sub(1) else {
        return;
    };
    let work = last & !1;
    dst[..C].copy_from_slice(&src[..C]);
    for (x, d) in dst[C..C * (1 + work)].chunks_exact_mut(2 * C).enumerate() {
        for c in 0..C {
            let (a, b) = (src[x * C + c].to_u32(), src[(x + 1) * C + c].to_u32());
            d[c] = T::from_u32((3 * a + b + 2) >> 2);
            d[C + c] = T::from_u32((a + 3 * b + 2) >> 2);
        }
    }
    let edge = (last / 2) * C;
    dst[last * C..pixels * C].copy_from_slice(&src[edge..edge + C]);
}

/// One output row of a 2x bilinear upsample, per channel.
pub fn up2_bilinear<T: Sample, const C: usize>(near: &[T], far: &[T], dst: &mut [T]) {
    let pixels = dst.len() / C;
    let Some(last) = pixels.checked_sub(1) else {
        return;
    };
    let work = last & !1;
    let edge = |p: usize, c: usize| {
        T::from_u32((3 * near[p * C + c].to_u32() + far[p * C + c].to_u32() + 2) >> 2)
    };
    for c in 0..C {
        dst[c] = edge(0, c);
    }
    for (x, d) in dst[C..C * (1 + work)].chunks_exact_mut(2 * C).enumerate() {
        for c in 0..C {
            let (n0, n1) = (near[x * C + c].to_u32(), near[(x + 1) * C + c].to_u32());
            let (f0, f1) = (far[x * C + c].to_u32(), far[(x + 1) * C + c].to_u32());
            d[c] = T::from_u32((9 * n0 + 3 * n1 + 3 * f0 + f1 + 8) >> 4);
            d[C + c] = T::from_u32((3 * n0 + 9 * n1 + f0 + 3 * f1 + 8) >> 4);
        }
    }
    for c in 0..C {
        dst[last * C + c] = edge(last / 2, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_down2() {
        let s = [10u8, 20, 30, 40, 50, 60, 70, 80];
        let t = [30u8, 40, 50, 60, 70, 80, 90, 100];
        let mut d = [0u8; 4];
        down2_point::<2>(&s, &t, &mut d);
        assert_eq!(d, [30, 40, 70, 80]);
        down2_linear::<2>(&s, &t, &mut d);
        assert_eq!(d, [20, 30, 60, 70]);
        down2_box::<2>(&s, &t, &mut d);
        assert_eq!(d, [30, 40, 70, 80]);
    }

    #[test]
    fn test_argb_down_even() {
        let s: Vec<u8> = (0..32).collect();
        let mut d = [0u8; 8];
        down_even_point::<4>(&s, &s, 4, &mut d);
        assert_eq!(d, [0, 1, 2, 3, 16, 17, 18, 19]);
        down_even_box::<4>(&s, &s, 4, &mut d);
        // average of pixels 0 and 1, then 4 and 5
        assert_eq!(d, [2, 3, 4, 5, 18, 19, 20, 21]);
    }

    #[test]
    fn test_uv_cols() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let mut d = [0u8; 4];
        cols::<2>(&src, &mut d, 0x8000, 0x2_0000);
        assert_eq!(d, [1, 2, 5, 6]);
        let mut up = [0u8; 6];
        cols_up2::<2>(&src[..4], &mut up, 0, 0);
        assert_eq!(up, [1, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_cols_blender() {
        let src = [0u8, 254, 254, 0];
        let mut d = [0u8; 2];
        filter_cols::<2>(&src, &mut d, 0x8000, 0);
        // f = 64, weights 63 and 64
        assert_eq!(d, [127, 125]);
    }

    #[test]
    fn test_uv_up2_linear_16() {
        let src = [0u16, 400, 400, 0];
        let mut d = [0u16; 8];
        up2_linear::<u16, 2>(&src, &mut d);
        assert_eq!(d, [0, 400, 100, 300, 300, 100, 400, 0]);
    }

    #[test]
    fn test_uv_up2_bilinear_matches_edges() {
        let near = [0u8, 0, 160, 160];
        let far = [80u8, 80, 240, 240];
        let mut d = [0u8; 8];
        up2_bilinear::<u8, 2>(&near, &far, &mut d);
        assert_eq!(d, [20, 20, 60, 60, 140, 140, 180, 180]);
    }
}
