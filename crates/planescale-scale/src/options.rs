//! Options for the typed and image entry points

use planescale_core::FilterMode;

/// Largest image accepted by default, in samples
pub const DEFAULT_MAX_IMAGE_SIZE: u32 = 16384 * 16384;

/// Scaling options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Requested filter; it may be reduced to a cheaper equivalent
    pub filter: FilterMode,
    /// Upper bound on `width * height` of a scaled image
    pub max_image_size: u32,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            filter: FilterMode::Box,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}

impl ScaleOptions {
    /// Create options with a specific filter
    pub fn with_filter(filter: FilterMode) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Create options with a specific size limit
    pub fn with_max_image_size(max_image_size: u32) -> Self {
        Self {
            max_image_size,
            ..Default::default()
        }
    }

    /// Set the filter
    pub fn filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Set the size limit
    pub fn max_image_size(mut self, max_image_size: u32) -> Self {
        self.max_image_size = max_image_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ScaleOptions::default();
        assert_eq!(opts.filter, FilterMode::Box);
        assert_eq!(opts.max_image_size, 268_435_456);
    }

    #[test]
    fn test_builders() {
        let opts = ScaleOptions::with_filter(FilterMode::Linear).max_image_size(100);
        assert_eq!(opts.filter, FilterMode::Linear);
        assert_eq!(opts.max_image_size, 100);
        let opts = ScaleOptions::with_max_image_size(64).filter(FilterMode::None);
        assert_eq!(opts.filter, FilterMode::None);
        assert_eq!(opts.max_image_size, 64);
    }
}
