//! Nearest-point interpolation along a stroke.
//!
//! For a query point, the stroke point closest along the search axis picks
//! a bracket of two stroke points. The query's search coordinate is then
//! mapped linearly between them to find the other coordinate. This
//! approximates looking straight up/down (or left/right) from the query and
//! intersecting the stroke.

use crate::orientation::{Orientation, classify};
use crate::stroke::Stroke;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Added to a zero-width source range before dividing.
pub const MAP_RANGE_EPSILON: f64 = 1e-4;

/// Pair of stroke points between which the query is interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Point at or beyond the query along the search axis.
    pub upper: Point,
    /// Point on the other side of the query.
    pub lower: Point,
}

impl Bracket {
    /// Whether both ends are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.upper == self.lower
    }

    /// Map the query's search coordinate into this bracket.
    ///
    /// The search coordinate of the query is kept; only the other axis moves.
    pub fn interpolate(&self, query: Point, orientation: Orientation) -> Point {
        let interpolated = if self.is_degenerate() {
            orientation.across(self.upper)
        } else {
            map_range(
                (orientation.along(self.upper), orientation.along(self.lower)),
                (orientation.across(self.upper), orientation.across(self.lower)),
                orientation.along(query),
            )
        };

        match orientation {
            Orientation::Vertical => Point::new(interpolated, query.y),
            Orientation::Horizontal => Point::new(query.x, interpolated),
        }
    }
}

/// Linearly map `value` from `from` into `to`.
///
/// A zero-width `from` range is widened by [`MAP_RANGE_EPSILON`], which
/// biases the result slightly instead of dividing by zero.
pub fn map_range(from: (f64, f64), to: (f64, f64), value: f64) -> f64 {
    let (a1, mut a2) = from;
    let (b1, b2) = to;
    if a1 == a2 {
        a2 += MAP_RANGE_EPSILON;
    }
    b1 + (value - a1) * (b2 - b1) / (a2 - a1)
}

/// Find the bracket around `query` used for interpolation.
///
/// The stroke point nearest to the query along the search axis decides the
/// bracket; later points only replace it when strictly nearer. Neighbors are
/// clamped, so the first point is its own predecessor and the last its own
/// successor.
///
/// Past either end of the stroke the bracket collapses onto the end point.
/// Returns `None` only for a multi-point stroke whose points all coincide,
/// even though a single-point stroke still snaps to its point.
pub fn nearest_segment(query: Point, stroke: &Stroke, orientation: Orientation) -> Option<Bracket> {
    let target = orientation.along(query);
    let mut nearest_distance = f64::INFINITY;
    let mut bracket = None;

    for (i, &point) in stroke.points().iter().enumerate() {
        let distance = (target - orientation.along(point)).abs();
        if distance.is_nan() || distance >= nearest_distance {
            continue;
        }
        nearest_distance = distance;

        let previous = stroke.clamped(i as isize - 1);
        let next = stroke.clamped(i as isize + 1);
        let at = orientation.along(point);

        bracket = Some(if at >= target {
            // Stroke point is ahead of the query; look behind it.
            let lower = if orientation.along(previous) > at || previous == point {
                next
            } else {
                previous
            };
            Bracket { upper: point, lower }
        } else {
            let upper = if orientation.along(previous) <= at || previous == point {
                next
            } else {
                previous
            };
            Bracket { upper, lower: point }
        });
    }

    let bracket = bracket?;
    if bracket.is_degenerate() && !stroke.is_degenerate() && is_collapsed(stroke) {
        return None;
    }
    Some(bracket)
}

fn is_collapsed(stroke: &Stroke) -> bool {
    let first = stroke.points()[0];
    stroke.points().iter().all(|&p| p == first)
}

/// Interpolated point on `stroke` aligned with `query` along `orientation`.
///
/// Falls back to `query` itself when no usable bracket exists.
pub fn interpolate(query: Point, stroke: &Stroke, orientation: Orientation) -> Point {
    match nearest_segment(query, stroke, orientation) {
        Some(bracket) => bracket.interpolate(query, orientation),
        None => query,
    }
}

/// Classify the stroke for `query` and interpolate in one step.
pub fn snap_to_stroke(query: Point, stroke: &Stroke) -> Point {
    interpolate(query, stroke, classify(stroke, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        Stroke::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_horizontal_stroke_snap() {
        let s = stroke(&[(0.0, 5.0), (10.0, 5.0), (20.0, 5.0)]);
        let query = Point::new(12.0, 50.0);
        assert_eq!(classify(&s, query), Orientation::Horizontal);

        let bracket = nearest_segment(query, &s, Orientation::Horizontal).unwrap();
        assert_eq!(bracket.lower, Point::new(10.0, 5.0));
        assert_eq!(bracket.upper, Point::new(20.0, 5.0));

        let result = snap_to_stroke(query, &s);
        assert!((result.x - 12.0).abs() < EPS);
        assert!((result.y - 5.0).abs() < EPS);
    }

    #[test]
    fn test_bracket_halfway() {
        let s = stroke(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
        let query = Point::new(-4.0, 15.0);

        let bracket = nearest_segment(query, &s, Orientation::Vertical).unwrap();
        assert_eq!(bracket.lower, Point::new(1.0, 10.0));
        assert_eq!(bracket.upper, Point::new(2.0, 20.0));

        let result = interpolate(query, &s, Orientation::Vertical);
        assert!((result.x - 1.5).abs() < EPS);
        assert!((result.y - 15.0).abs() < EPS);
    }

    #[test]
    fn test_search_axis_unit_steps() {
        let s = stroke(&[(0.0, 0.0), (1.0, 0.0), (2.0, 4.0), (3.0, 4.0)]);
        let result = interpolate(Point::new(1.5, 9.0), &s, Orientation::Horizontal);
        assert!((result.x - 1.5).abs() < EPS);
        assert!((result.y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_reversed_stroke_same_result() {
        let forward = stroke(&[(0.0, 0.0), (10.0, 2.0), (20.0, 4.0)]);
        let backward = stroke(&[(20.0, 4.0), (10.0, 2.0), (0.0, 0.0)]);
        let query = Point::new(15.0, -3.0);

        let a = interpolate(query, &forward, Orientation::Horizontal);
        let b = interpolate(query, &backward, Orientation::Horizontal);
        assert!((a.y - 3.0).abs() < EPS);
        assert!((b.y - 3.0).abs() < EPS);
    }

    #[test]
    fn test_query_outside_stroke_ends() {
        let s = stroke(&[(0.0, 0.0), (10.0, 10.0)]);
        let bracket = nearest_segment(Point::new(20.0, 0.0), &s, Orientation::Horizontal).unwrap();
        assert!(bracket.is_degenerate());

        let result = interpolate(Point::new(20.0, 0.0), &s, Orientation::Horizontal);
        assert!((result.x - 20.0).abs() < EPS);
        assert!((result.y - 10.0).abs() < EPS);

        // Before the start the first segment still brackets the query.
        let result = interpolate(Point::new(-5.0, 3.0), &s, Orientation::Horizontal);
        assert!((result.x + 5.0).abs() < EPS);
        assert!((result.y + 5.0).abs() < EPS);
    }

    #[test]
    fn test_first_strictly_nearest_wins() {
        // Points 1 and 3 are equally near along X; the first one keeps the bracket.
        let s = stroke(&[(0.0, 0.0), (4.0, 4.0), (6.0, 100.0), (4.0, 8.0)]);
        let bracket = nearest_segment(Point::new(4.0, 0.0), &s, Orientation::Horizontal).unwrap();
        assert_eq!(bracket.upper, Point::new(4.0, 4.0));
        assert_eq!(bracket.lower, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_width_range_is_finite() {
        let s = stroke(&[(5.0, 0.0), (5.0, 10.0)]);
        let result = interpolate(Point::new(5.0, 3.0), &s, Orientation::Horizontal);
        assert!(result.x.is_finite());
        assert!(result.y.is_finite());
    }

    #[test]
    fn test_map_range() {
        assert!((map_range((0.0, 10.0), (0.0, 100.0), 2.5) - 25.0).abs() < EPS);
        assert!((map_range((10.0, 0.0), (1.0, 2.0), 5.0) - 1.5).abs() < EPS);
        // Degenerate source range collapses to the start of the target range.
        assert!((map_range((3.0, 3.0), (7.0, 9.0), 3.0) - 7.0).abs() < EPS);
    }

    #[test]
    fn test_single_point_stroke() {
        let s = Stroke::single(Point::new(10.0, 10.0));
        let query = Point::new(40.0, 12.0);
        let result = snap_to_stroke(query, &s);
        assert!((result.x - 40.0).abs() < EPS);
        assert!((result.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_coincident_points_return_query() {
        let s = stroke(&[(1.0, 1.0), (1.0, 1.0)]);
        let query = Point::new(3.0, 8.0);
        assert!(nearest_segment(query, &s, Orientation::Vertical).is_none());
        assert_eq!(interpolate(query, &s, Orientation::Vertical), query);
    }

    #[test]
    fn test_non_finite_query_unchanged() {
        let s = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let query = Point::new(f64::NAN, 1.0);
        let result = interpolate(query, &s, Orientation::Horizontal);
        assert!(result.x.is_nan());
        assert!((result.y - 1.0).abs() < EPS);
    }
}
