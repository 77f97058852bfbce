//! Bézier paths through chart points.

use kurbo::{BezPath, PathEl, Point};

use crate::curve;

/// A path of straight lines through `points`.
///
/// The first point is repeated as a zero-length line after the initial
/// `MoveTo`, so the path has one `LineTo` per point.
pub fn line_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some(&first) = points.first() {
        path.move_to(first);
        path.extend(line_elements(points));
    }
    path
}

/// A smooth path through `points`, see [`curve::interpolate`].
///
/// A single point produces just the `MoveTo`.
pub fn curved_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some(&first) = points.first() {
        path.move_to(first);
        path.extend(curve_elements(points));
    }
    path
}

/// The closed region between the line through `points` and `baseline`.
///
/// The outline runs from the baseline below the first point up to the line,
/// along it (smoothly if `curved`), and back down to the baseline below the
/// last point.
pub fn fill_path(points: &[Point], baseline: f64, curved: bool) -> BezPath {
    let mut path = BezPath::new();
    let (first, last) = match (points.first(), points.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return path,
    };
    path.move_to(Point::new(first.x, baseline));
    path.line_to(first);
    if curved {
        path.extend(curve_elements(points));
    } else {
        path.extend(line_elements(&points[1..]));
    }
    path.line_to(Point::new(last.x, baseline));
    path.close_path();
    path
}

fn line_elements(points: &[Point]) -> impl Iterator<Item = PathEl> + '_ {
    points.iter().map(|&p| PathEl::LineTo(p))
}

fn curve_elements(points: &[Point]) -> impl Iterator<Item = PathEl> + '_ {
    curve::interpolate(points)
        .into_iter()
        .zip(&points[1..])
        .map(|(seg, &p)| PathEl::CurveTo(seg.p1, seg.p2, p))
}
