//! Sample arithmetic and output stores
//!
//! Every kernel computes in `u32` and hands the result to a [`Store`],
//! which either keeps the sample width or narrows 16-bit values to 8 bits.
//! One generic kernel thus serves the 8-bit, 16-bit and 16-to-8 paths.

use crate::error::{ScaleError, ScaleResult};
use planescale_core::Sample;
use std::marker::PhantomData;

/// Sample types the scaler works on.
pub trait ScaleSample: Sample {
    /// Horizontal blend of `a` and `b` at 16-bit fraction `f`.
    fn blend(a: u32, b: u32, f: u32) -> u32;
}

impl ScaleSample for u8 {
    /// 7-bit weight, rounded.
    #[inline]
    fn blend(a: u32, b: u32, f: u32) -> u32 {
        let (a, b) = (a as i32, b as i32);
        let f = (f >> 9) as i32;
        (a + ((f * (b - a) + 0x40) >> 7)) as u32
    }
}

impl ScaleSample for u16 {
    #[inline]
    fn blend(a: u32, b: u32, f: u32) -> u32 {
        let (a, b) = (i64::from(a), i64::from(b));
        (a + ((i64::from(f) * (b - a) + 0x8000) >> 16)) as u32
    }
}

/// Destination of kernel results.
pub trait Store: Copy {
    type Out: Sample;

    fn put(self, v: u32) -> Self::Out;
}

/// Store that keeps the sample type.
#[derive(Debug)]
pub struct Keep<T>(PhantomData<T>);

impl<T> Keep<T> {
    pub fn new() -> Self {
        Keep(PhantomData)
    }
}

impl<T> Default for Keep<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Keep<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Keep<T> {}

impl<T: Sample> Store for Keep<T> {
    type Out = T;

    #[inline]
    fn put(self, v: u32) -> T {
        T::from_u32(v)
    }
}

/// Store that narrows 16-bit values to 8 bits, `clamp255((v * scale) >> 16)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrow {
    scale: u32,
}

impl Narrow {
    /// Smallest accepted scale: 16 significant bits
    pub const MIN_SCALE: i32 = 256;
    /// Largest accepted scale: 9 significant bits
    pub const MAX_SCALE: i32 = 32768;

    pub fn new(scale: i32) -> ScaleResult<Self> {
        if !(Self::MIN_SCALE..=Self::MAX_SCALE).contains(&scale) {
            return Err(ScaleError::InvalidScaleFactor(format!(
                "narrowing scale {} outside {}..={}",
                scale,
                Self::MIN_SCALE,
                Self::MAX_SCALE
            )));
        }
        Ok(Narrow { scale: scale as u32 })
    }

    /// Scale for samples holding `depth` significant bits.
    pub fn for_depth(depth: u32) -> ScaleResult<Self> {
        if !(9..=16).contains(&depth) {
            return Err(ScaleError::InvalidScaleFactor(format!(
                "cannot narrow {}-bit samples",
                depth
            )));
        }
        Self::new(1 << (24 - depth))
    }

    pub fn scale(&self) -> i32 {
        self.scale as i32
    }
}

impl Store for Narrow {
    type Out = u8;

    #[inline]
    fn put(self, v: u32) -> u8 {
        ((u64::from(v) * u64::from(self.scale)) >> 16).min(255) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_8() {
        assert_eq!(u8::blend(0, 255, 0), 0);
        assert_eq!(u8::blend(0, 255, 0x8000), 128);
        assert_eq!(u8::blend(200, 100, 0x8000), 150);
        assert_eq!(u8::blend(10, 20, 0xffff), 20);
    }

    #[test]
    fn test_blend_16() {
        assert_eq!(u16::blend(0, 65535, 0x8000), 32768);
        assert_eq!(u16::blend(1000, 0, 0x4000), 750);
    }

    #[test]
    fn test_narrow() {
        let full = Narrow::new(256).unwrap();
        assert_eq!(full.put(65535), 255);
        assert_eq!(full.put(256), 1);

        let ten = Narrow::for_depth(10).unwrap();
        assert_eq!(ten.scale(), 16384);
        assert_eq!(ten.put(1023), 255);
        assert_eq!(ten.put(4000), 255);
        assert_eq!(ten.put(512), 128);
    }

    #[test]
    fn test_narrow_rejects_out_of_range() {
        assert!(Narrow::new(255).is_err());
        assert!(Narrow::new(32769).is_err());
        assert!(Narrow::for_depth(8).is_err());
    }
}
