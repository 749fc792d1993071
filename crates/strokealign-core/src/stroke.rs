//! Viewport-space stroke used as the alignment guide.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An ordered, non-empty polyline in 2D viewport space.
///
/// Points keep their drawing order. The sequence need not be monotonic
/// along either axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke from points. Returns `None` when `points` is empty.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    /// Create a single-point stroke.
    pub fn single(point: Point) -> Self {
        Self { points: vec![point] }
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether this stroke has a single point.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() == 1
    }

    /// Get a point by index, clamped to the valid range.
    ///
    /// Index -1 yields the first point and `len` yields the last one.
    pub fn clamped(&self, index: isize) -> Point {
        let last = self.points.len() as isize - 1;
        self.points[index.clamp(0, last) as usize]
    }

    /// Axis-aligned bounding box of all points.
    pub fn bounds(&self) -> Rect {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }
}
