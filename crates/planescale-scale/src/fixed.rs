//! 16.16 fixed-point helpers
//!
//! Positions are carried as `i64` so that wide planes never overflow the
//! accumulator; values agree with 32-bit arithmetic whenever that does
//! not overflow.

/// One in 16.16 fixed point
pub const ONE: i64 = 1 << 16;

/// `num / den` in 16.16 fixed point.
#[inline]
pub fn fixed_div(num: i64, den: i64) -> i64 {
    debug_assert!(den != 0);
    (num << 16) / den
}

/// Endpoint-anchored `(num - 1) / (den - 1)` in 16.16 fixed point.
///
/// Maps the first and last destination samples onto the first and last
/// source samples. Requires `den > 1`.
#[inline]
pub fn fixed_div1(num: i64, den: i64) -> i64 {
    debug_assert!(den > 1);
    ((num << 16) - 0x0001_0001) / (den - 1)
}

/// Start position half a step in, offset by `s`, symmetric around zero.
#[inline]
pub fn center_start(d: i64, s: i64) -> i64 {
    if d < 0 { -((-d >> 1) + s) } else { (d >> 1) + s }
}
