//! Synthetic test planes

use planescale_core::{Plane, Sample};

/// Linear congruential generator for reproducible noise
#[derive(Debug, Clone)]
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `0..=max`
    pub fn below_or_eq(&mut self, max: u32) -> u32 {
        ((self.next_u64() >> 33) % (max as u64 + 1)) as u32
    }
}

/// Noise plane with samples in `0..=max`.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn noise_plane<T: Sample>(width: u32, height: u32, max: u32, seed: u32) -> Plane<T> {
    let mut rng = TestRng::new(seed);
    Plane::from_fn(width, height, |_, _| T::from_u32(rng.below_or_eq(max)))
        .expect("test plane dimensions must be non-zero")
}

/// Diagonal gradient spanning `0..=max`.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn gradient_plane<T: Sample>(width: u32, height: u32, max: u32) -> Plane<T> {
    let span = (width + height).saturating_sub(2).max(1) as u64;
    Plane::from_fn(width, height, |x, y| {
        T::from_u32(((x + y) as u64 * max as u64 / span) as u32)
    })
    .expect("test plane dimensions must be non-zero")
}

/// Plane of a single value.
pub fn flat_plane<T: Sample>(width: u32, height: u32, value: T) -> Plane<T> {
    Plane::from_fn(width, height, |_, _| value).expect("test plane dimensions must be non-zero")
}

/// Interleaved noise row buffer with `channels` samples per pixel.
pub fn noise_packed(width: u32, height: u32, channels: u32, seed: u32) -> Vec<u8> {
    let mut rng = TestRng::new(seed);
    (0..width * height * channels)
        .map(|_| rng.below_or_eq(255) as u8)
        .collect()
}
