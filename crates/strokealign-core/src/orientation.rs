//! Horizontal/vertical classification of a stroke.

use crate::stroke::Stroke;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which axis the interpolator searches along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Search along X, interpolate Y.
    #[default]
    Horizontal,
    /// Search along Y, interpolate X.
    Vertical,
}

impl Orientation {
    /// Index of the search axis (0 = X, 1 = Y).
    pub fn search_axis(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }

    /// Index of the interpolated axis.
    pub fn interpolated_axis(self) -> usize {
        1 - self.search_axis()
    }

    /// Coordinate of `point` along the search axis.
    pub fn along(self, point: Point) -> f64 {
        axis(point, self.search_axis())
    }

    /// Coordinate of `point` along the interpolated axis.
    pub fn across(self, point: Point) -> f64 {
        axis(point, self.interpolated_axis())
    }
}

fn axis(point: Point, index: usize) -> f64 {
    if index == 0 { point.x } else { point.y }
}

/// Decide whether `stroke` should be searched horizontally or vertically.
///
/// Only a single-point stroke looks at `query`. Otherwise the wider side of
/// the stroke's bounding box wins, and a square box counts as horizontal.
pub fn classify(stroke: &Stroke, query: Point) -> Orientation {
    if stroke.is_degenerate() {
        let only = stroke.points()[0];
        return if (only.x - query.x).abs() > (only.y - query.y).abs() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
    }

    let bounds = stroke.bounds();
    if bounds.height() > bounds.width() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        Stroke::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_wide_stroke_is_horizontal() {
        let s = stroke(&[(0.0, 5.0), (10.0, 5.0), (20.0, 6.0)]);
        for query in [Point::new(-100.0, 0.0), Point::new(5.0, 500.0), Point::ZERO] {
            assert_eq!(classify(&s, query), Orientation::Horizontal);
        }
    }

    #[test]
    fn test_tall_stroke_is_vertical() {
        let s = stroke(&[(3.0, 0.0), (4.0, 30.0), (2.0, 60.0)]);
        assert_eq!(classify(&s, Point::new(1000.0, 0.0)), Orientation::Vertical);
    }

    #[test]
    fn test_square_bounds_tie_is_horizontal() {
        let s = stroke(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(classify(&s, Point::new(3.0, 7.0)), Orientation::Horizontal);
    }

    #[test]
    fn test_single_point_depends_on_query() {
        let s = Stroke::single(Point::new(0.0, 0.0));
        assert_eq!(classify(&s, Point::new(10.0, 1.0)), Orientation::Horizontal);
        assert_eq!(classify(&s, Point::new(1.0, 10.0)), Orientation::Vertical);
        // Equal deltas fall to vertical.
        assert_eq!(classify(&s, Point::new(5.0, 5.0)), Orientation::Vertical);
    }

    #[test]
    fn test_axes() {
        assert_eq!(Orientation::Horizontal.search_axis(), 0);
        assert_eq!(Orientation::Vertical.interpolated_axis(), 0);
        let p = Point::new(1.0, 2.0);
        assert!((Orientation::Vertical.along(p) - 2.0).abs() < f64::EPSILON);
        assert!((Orientation::Vertical.across(p) - 1.0).abs() < f64::EPSILON);
    }
}
