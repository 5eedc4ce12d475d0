//! Reader metadata document (`meta.json`).
//!
//! The web reader loads page sizes, layout direction and per-page
//! viewports from a single document. This is the full form of the
//! converter output; the bare viewport array is its `Viewpoints` field.

use super::OutputPage;
use serde::{Deserialize, Serialize};

/// Direction in which the reader lays out consecutive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right (reader default)
    Right,
    /// Right to left
    Left,
    /// Top to bottom
    Down,
    /// Bottom to top
    Up,
}

/// Reader metadata for one book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderMeta {
    /// Page layout direction; absent means the reader default.
    #[serde(rename = "Direction", default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    /// Page pixel sizes as `[width, height]`
    #[serde(rename = "Pages")]
    pub pages: Vec<[f64; 2]>,

    /// Viewports per page, parallel to `pages`
    #[serde(rename = "Viewpoints")]
    pub viewpoints: Vec<OutputPage>,
}
