//! Scroll position of a single section element.

use serde::{Deserialize, Serialize};

/// Pixel slack used when comparing scroll positions against section edges.
///
/// Browsers report fractional `scrollTop` values after zooming, so exact
/// comparisons flap between "at edge" and "not at edge".
pub const BOUNDARY_TOLERANCE_PX: f64 = 2.0;

/// Snapshot of an element's `scrollTop`, `scrollHeight` and `clientHeight`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Metrics of a section whose content fits without overflow.
    pub const fn fitted(height: f64) -> Self {
        Self::new(0.0, height, height)
    }

    /// Returns true if the section cannot scroll further up.
    pub fn is_at_top(&self, tolerance: f64) -> bool {
        self.scroll_top <= tolerance
    }

    /// Returns true if the section cannot scroll further down.
    pub fn is_at_bottom(&self, tolerance: f64) -> bool {
        if self.scroll_height <= self.client_height {
            return true;
        }
        (self.scroll_height - self.client_height - self.scroll_top).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_section_is_at_both_edges() {
        let metrics = ScrollMetrics::fitted(800.0);
        assert!(metrics.is_at_top(BOUNDARY_TOLERANCE_PX));
        assert!(metrics.is_at_bottom(BOUNDARY_TOLERANCE_PX));
    }

    #[test]
    fn test_overflowing_section_edges() {
        let top = ScrollMetrics::new(0.0, 2000.0, 800.0);
        assert!(top.is_at_top(BOUNDARY_TOLERANCE_PX));
        assert!(!top.is_at_bottom(BOUNDARY_TOLERANCE_PX));

        let middle = ScrollMetrics::new(600.0, 2000.0, 800.0);
        assert!(!middle.is_at_top(BOUNDARY_TOLERANCE_PX));
        assert!(!middle.is_at_bottom(BOUNDARY_TOLERANCE_PX));

        let bottom = ScrollMetrics::new(1200.0, 2000.0, 800.0);
        assert!(!bottom.is_at_top(BOUNDARY_TOLERANCE_PX));
        assert!(bottom.is_at_bottom(BOUNDARY_TOLERANCE_PX));
    }

    #[test]
    fn test_subpixel_rounding_within_tolerance() {
        // Zoomed pages report fractional positions just short of the edge.
        let almost_bottom = ScrollMetrics::new(1198.6, 2000.0, 800.0);
        assert!(almost_bottom.is_at_bottom(BOUNDARY_TOLERANCE_PX));
        assert!(!almost_bottom.is_at_bottom(0.5));

        let almost_top = ScrollMetrics::new(1.4, 2000.0, 800.0);
        assert!(almost_top.is_at_top(BOUNDARY_TOLERANCE_PX));
    }
}
