//! Filter modes
//!
//! A flat enumeration consumed by every part of the scaler. Ordering is
//! by cost: `None` is cheapest, `Box` gives the best quality when
//! shrinking.

use std::fmt;

/// Resampling filter quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FilterMode {
    /// Point sampling, fastest
    None,
    /// Filter horizontally only
    Linear,
    /// Filter both axes, lower quality than box when shrinking
    Bilinear,
    /// Area average, highest quality
    #[default]
    Box,
}

impl FilterMode {
    /// All modes, cheapest first
    pub const ALL: [FilterMode; 4] = [
        FilterMode::None,
        FilterMode::Linear,
        FilterMode::Bilinear,
        FilterMode::Box,
    ];

    /// Whether any interpolation is applied.
    #[inline]
    pub fn is_filtering(self) -> bool {
        self != FilterMode::None
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::None => "none",
            FilterMode::Linear => "linear",
            FilterMode::Bilinear => "bilinear",
            FilterMode::Box => "box",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordered_by_cost() {
        assert!(FilterMode::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(FilterMode::ALL.iter().filter(|m| m.is_filtering()).count(), 3);
    }

    #[test]
    fn test_is_filtering() {
        assert!(!FilterMode::None.is_filtering());
        assert!(FilterMode::Linear.is_filtering());
        assert!(FilterMode::Box.is_filtering());
        assert_eq!(FilterMode::default(), FilterMode::Box);
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterMode::Bilinear.to_string(), "bilinear");
    }
}
