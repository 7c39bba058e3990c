//! Geometric primitives for layout analysis.
//!
//! OCR detectors report each recognized line as a quadrilateral of four
//! planar points. The quadrilateral is not guaranteed to be axis-aligned;
//! all derived extents are computed as min/max over the four points.

use serde::{Deserialize, Serialize};

/// A 2D point in page pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A quadrilateral bounding box of four corner points.
///
/// This is the raw detection geometry as the OCR engine provides it.
/// Downstream analysis treats it as axis-aligned: height and width are
/// derived from min/max over each axis, so a skewed quadrilateral yields
/// the extents of its enclosing rectangle. Degenerate quadrilaterals
/// (all points on a line, or a single repeated point) are legal and yield
/// zero extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    /// Create a quadrilateral from four corner points.
    pub fn new(points: [Point; 4]) -> Self {
        Self(points)
    }

    /// Create an axis-aligned quadrilateral from position and dimensions.
    ///
    /// Points are ordered clockwise from the top-left corner, matching the
    /// convention of common OCR detectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::Quad;
    ///
    /// let quad = Quad::axis_aligned(10.0, 20.0, 100.0, 15.0);
    /// assert_eq!(quad.left(), 10.0);
    /// assert_eq!(quad.width(), 100.0);
    /// assert_eq!(quad.height(), 15.0);
    /// ```
    pub fn axis_aligned(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self([
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    /// Get the left edge x-coordinate (minimum x over all points).
    pub fn left(&self) -> f32 {
        fold_min(self.0.iter().map(|p| p.x))
    }

    /// Get the right edge x-coordinate (maximum x over all points).
    pub fn right(&self) -> f32 {
        fold_max(self.0.iter().map(|p| p.x))
    }

    /// Get the top edge y-coordinate (minimum y over all points).
    ///
    /// Page pixel space has its origin at the top-left corner, so smaller
    /// y means closer to the top of the page.
    pub fn top(&self) -> f32 {
        fold_min(self.0.iter().map(|p| p.y))
    }

    /// Get the bottom edge y-coordinate (maximum y over all points).
    pub fn bottom(&self) -> f32 {
        fold_max(self.0.iter().map(|p| p.y))
    }

    /// Width of the enclosing axis-aligned rectangle. Always non-negative.
    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Height of the enclosing axis-aligned rectangle. Always non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::{Point, Quad};
    ///
    /// // A skewed quadrilateral still yields its enclosing extent.
    /// let quad = Quad::new([
    ///     Point::new(0.0, 2.0),
    ///     Point::new(50.0, 0.0),
    ///     Point::new(52.0, 12.0),
    ///     Point::new(2.0, 14.0),
    /// ]);
    /// assert_eq!(quad.height(), 14.0);
    /// ```
    pub fn height(&self) -> f32 {
        self.bottom() - self.top()
    }

    /// Horizontal midpoint of the enclosing rectangle.
    pub fn center_x(&self) -> f32 {
        (self.left() + self.right()) / 2.0
    }
}

fn fold_min(values: impl Iterator<Item = f32>) -> f32 {
    values.fold(f32::INFINITY, f32::min)
}

fn fold_max(values: impl Iterator<Item = f32>) -> f32 {
    values.fold(f32::NEG_INFINITY, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_axis_aligned_edges() {
        let q = Quad::axis_aligned(10.0, 20.0, 100.0, 50.0);
        assert_eq!(q.left(), 10.0);
        assert_eq!(q.right(), 110.0);
        assert_eq!(q.top(), 20.0);
        assert_eq!(q.bottom(), 70.0);
        assert_eq!(q.width(), 100.0);
        assert_eq!(q.height(), 50.0);
    }

    #[test]
    fn test_center_x() {
        let q = Quad::axis_aligned(0.0, 0.0, 100.0, 10.0);
        assert_eq!(q.center_x(), 50.0);
    }

    #[test]
    fn test_skewed_quad_extents() {
        // Corners do not form an axis-aligned rectangle
        let q = Quad::new([
            Point::new(5.0, 2.0),
            Point::new(95.0, 0.0),
            Point::new(100.0, 11.0),
            Point::new(10.0, 14.0),
        ]);
        assert_eq!(q.left(), 5.0);
        assert_eq!(q.right(), 100.0);
        assert_eq!(q.top(), 0.0);
        assert_eq!(q.bottom(), 14.0);
        assert_eq!(q.height(), 14.0);
    }

    #[test]
    fn test_degenerate_quad_has_zero_extents() {
        let p = Point::new(42.0, 17.0);
        let q = Quad::new([p, p, p, p]);
        assert_eq!(q.width(), 0.0);
        assert_eq!(q.height(), 0.0);
    }

    #[test]
    fn test_quad_serde_roundtrip() {
        let q = Quad::axis_aligned(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quad = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
