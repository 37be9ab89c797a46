//! Filter reduction
//!
//! Picks the cheapest filter that produces the same output as the
//! requested one for a given ratio.

use planescale_core::FilterMode;

/// Effective filter for scaling `src` to `dst`.
///
/// Source dimensions may be negative (mirrored); their magnitude is used.
pub fn reduce_filter(
    src_width: i32,
    src_height: i32,
    dst_width: i32,
    dst_height: i32,
    filter: FilterMode,
) -> FilterMode {
    let (sw, sh) = (i64::from(src_width).abs(), i64::from(src_height).abs());
    let (dw, dh) = (i64::from(dst_width), i64::from(dst_height));
    let mut filter = filter;

    if filter == FilterMode::Box && (2 * dw >= sw || 2 * dh >= sh) {
        filter = FilterMode::Bilinear;
    }
    if filter == FilterMode::Bilinear {
        if sh == 1 || dh == sh || 3 * dh == sh {
            filter = FilterMode::Linear;
        }
        // Single column: nothing to blend horizontally either
        if sw == 1 {
            filter = FilterMode::None;
        }
    }
    if filter == FilterMode::Linear && (sw == 1 || dw == sw || 3 * dw == sw) {
        filter = FilterMode::None;
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_kept_for_large_reductions() {
        assert_eq!(reduce_filter(64, 64, 16, 16, FilterMode::Box), FilterMode::Box);
        assert_eq!(reduce_filter(-64, -64, 16, 16, FilterMode::Box), FilterMode::Box);
    }

    #[test]
    fn test_box_becomes_bilinear() {
        assert_eq!(reduce_filter(64, 64, 32, 32, FilterMode::Box), FilterMode::Bilinear);
        assert_eq!(reduce_filter(64, 64, 32, 8, FilterMode::Box), FilterMode::Bilinear);
    }

    #[test]
    fn test_bilinear_cascade() {
        assert_eq!(reduce_filter(64, 32, 40, 32, FilterMode::Bilinear), FilterMode::Linear);
        assert_eq!(reduce_filter(64, 48, 40, 16, FilterMode::Bilinear), FilterMode::Linear);
        assert_eq!(reduce_filter(64, 32, 64, 32, FilterMode::Bilinear), FilterMode::None);
        assert_eq!(reduce_filter(1, 32, 4, 16, FilterMode::Bilinear), FilterMode::None);
        assert_eq!(reduce_filter(64, 1, 40, 5, FilterMode::Bilinear), FilterMode::Linear);
    }

    #[test]
    fn test_linear_cascade() {
        assert_eq!(reduce_filter(30, 8, 10, 4, FilterMode::Linear), FilterMode::None);
        assert_eq!(reduce_filter(30, 8, 20, 4, FilterMode::Linear), FilterMode::Linear);
        assert_eq!(reduce_filter(1, 8, 20, 4, FilterMode::Linear), FilterMode::None);
    }

    #[test]
    fn test_none_unchanged() {
        for (sw, sh, dw, dh) in [(8, 8, 2, 2), (3, 5, 7, 11), (-9, 4, 9, 4)] {
            assert_eq!(reduce_filter(sw, sh, dw, dh, FilterMode::None), FilterMode::None);
        }
    }
}
