//! Geometric primitives for block positions.
//!
//! The analysis service reports every block's location as a bounding box in
//! normalized page coordinates: left/top/width/height are fractions of the
//! page dimensions in `0.0..=1.0`, with the origin at the top-left corner.

use serde::{Deserialize, Serialize};

/// A block's bounding box in normalized page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoundingBox {
    /// Distance from the left page edge, as a fraction of page width.
    pub left: f32,
    /// Distance from the top page edge, as a fraction of page height.
    pub top: f32,
    /// Width as a fraction of page width.
    pub width: f32,
    /// Height as a fraction of page height.
    pub height: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    ///
    /// # Examples
    ///
    /// ```
    /// use policy_extract::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(0.1, 0.2, 0.3, 0.05);
    /// assert_eq!(bbox.left, 0.1);
    /// assert_eq!(bbox.height, 0.05);
    /// ```
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the right edge, as a fraction of page width.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Get the bottom edge, as a fraction of page height.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check whether this box sits on the same visual row as `other`,
    /// i.e. their top edges differ by less than `tolerance` page-height
    /// fractions.
    ///
    /// # Examples
    ///
    /// ```
    /// use policy_extract::geometry::BoundingBox;
    ///
    /// let a = BoundingBox::new(0.1, 0.500, 0.2, 0.02);
    /// let b = BoundingBox::new(0.5, 0.505, 0.2, 0.02);
    /// assert!(a.is_same_row(&b, 0.01));
    /// assert!(!a.is_same_row(&b, 0.001));
    /// ```
    pub fn is_same_row(&self, other: &BoundingBox, tolerance: f32) -> bool {
        (self.top - other.top).abs() < tolerance
    }

    /// Check whether this box starts strictly to the right of `other`.
    pub fn is_right_of(&self, other: &BoundingBox) -> bool {
        self.left > other.left
    }
}
