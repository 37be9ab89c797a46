//! Sample types stored in planes
//!
//! Planes hold either 8-bit or 16-bit samples. Higher bit depths
//! (10, 12, 14) are stored LSB-aligned in 16-bit samples.

use std::fmt::Debug;

/// A single plane sample.
///
/// Implemented for `u8` and `u16`. Arithmetic in the kernels is done in
/// `u32` after widening with [`Sample::to_u32`]; results are narrowed back
/// with [`Sample::from_u32`], which truncates like an integer cast.
pub trait Sample: Copy + Default + Debug + PartialEq + Eq + Ord + Send + Sync + 'static {
    /// Storage width in bits
    const BITS: u32;
    /// Largest representable sample
    const MAX: Self;

    /// Widen to `u32` (lossless).
    fn to_u32(self) -> u32;

    /// Narrow from `u32`, keeping the low [`Sample::BITS`] bits.
    fn from_u32(v: u32) -> Self;
}

impl Sample for u8 {
    const BITS: u32 = 8;
    const MAX: Self = u8::MAX;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u8
    }
}

impl Sample for u16 {
    const BITS: u32 = 16;
    const MAX: Self = u16::MAX;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u16
    }
}
