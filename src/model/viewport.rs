//! Normalized viewport output types.

use super::SourceViewport;
use serde::{Deserialize, Serialize};

/// Decimal places kept in normalized coordinates.
pub const PRECISION: i32 = 3;

/// A panel rectangle expressed as fractions of the page size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedViewport {
    /// Left edge, fraction of page width
    #[serde(rename = "X")]
    pub x: f64,

    /// Top edge, fraction of page height
    #[serde(rename = "Y")]
    pub y: f64,

    /// Width, fraction of page width
    #[serde(rename = "W")]
    pub w: f64,

    /// Height, fraction of page height
    #[serde(rename = "H")]
    pub h: f64,
}

impl NormalizedViewport {
    /// Create a viewport from already normalized values, rounding each one.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: round_fraction(x),
            y: round_fraction(y),
            w: round_fraction(w),
            h: round_fraction(h),
        }
    }

    /// The viewport covering the whole page.
    pub fn full_page() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Normalize a pixel viewport against the page it sits on.
    pub fn from_pixels(viewport: &SourceViewport, page_width: f64, page_height: f64) -> Self {
        Self::new(
            viewport.pos_x / page_width,
            viewport.pos_y / page_height,
            viewport.width / page_width,
            viewport.height / page_height,
        )
    }
}

/// Viewports of one output page.
///
/// `None` is the compact form of a page whose only viewport is the whole
/// page; it serializes as JSON `null`.
pub type OutputPage = Option<Vec<NormalizedViewport>>;

/// Round a fraction to [`PRECISION`] decimal places, half away from zero.
pub fn round_fraction(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;

    fn viewport(pos_x: f64, pos_y: f64, width: f64, height: f64) -> SourceViewport {
        SourceViewport {
            id: EntityId::Number(1),
            page_id: EntityId::Number(1),
            sort_order: 1,
            pos_x,
            pos_y,
            width,
            height,
            ext_url: None,
        }
    }

    #[test]
    fn test_round_fraction() {
        assert_eq!(round_fraction(0.1), 0.1);
        assert_eq!(round_fraction(1.0 / 3.0), 0.333);
        assert_eq!(round_fraction(2.0 / 3.0), 0.667);
        assert_eq!(round_fraction(0.0004), 0.0);
    }

    #[test]
    fn test_rounded_values_have_three_decimals() {
        let vp = NormalizedViewport::from_pixels(&viewport(13.0, 7.0, 311.0, 97.0), 997.0, 1531.0);
        for value in [vp.x, vp.y, vp.w, vp.h] {
            let scaled = value * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{value}");
        }
    }

    #[test]
    fn test_from_pixels_full_page() {
        let vp = NormalizedViewport::from_pixels(&viewport(0.0, 0.0, 1988.0, 3056.0), 1988.0, 3056.0);
        assert_eq!(vp, NormalizedViewport::full_page());
    }

    #[test]
    fn test_serialized_key_order() {
        let vp = NormalizedViewport::from_pixels(&viewport(100.0, 50.0, 200.0, 100.0), 1000.0, 500.0);
        let json = serde_json::to_string(&vp).unwrap();
        assert_eq!(json, r#"{"X":0.1,"Y":0.1,"W":0.2,"H":0.2}"#);
    }
}
