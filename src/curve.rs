//! Smooth interpolation through a sequence of points.
//!
//! The curve through `n` points is made of `n - 1` cubic Béziers. Each
//! transition first gets control points placed proportionally along its
//! chord, then every interior point has the control points on both of its
//! sides averaged with their reflections through the point. After that pass
//! the incoming and outgoing handles at each interior point are colinear, so
//! the curve has a continuous tangent direction through every sample.

use kurbo::{CubicBez, Point};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::util;

/// How far, as a fraction of the chord, control points reach from their
/// anchor point before smoothing.
pub const TENSION: f64 = 0.3;

/// The control points of the cubic Bézier between two consecutive points.
///
/// The end points are not stored; segment `i` of the result of
/// [`interpolate`] belongs to the transition `points[i] -> points[i + 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Segment {
    /// The control point leaving the start point.
    pub p1: Point,
    /// The control point entering the end point.
    pub p2: Point,
}

impl Segment {
    /// Control points placed along the chord from `a` to `b`.
    fn chord(a: Point, b: Point) -> Segment {
        let d = b - a;
        Segment {
            p1: Point::new(a.x + TENSION * d.x, a.y + TENSION * d.y),
            p2: Point::new(b.x - TENSION * d.x, b.y - TENSION * d.y),
        }
    }

    /// The cubic Bézier from `p0` to `p3` using these control points.
    pub fn to_cubic(&self, p0: Point, p3: Point) -> CubicBez {
        CubicBez::new(p0, self.p1, self.p2, p3)
    }
}

/// Compute the segments of a smooth curve through `points`.
///
/// Returns one [`Segment`] per consecutive pair of points, in order. Fewer
/// than two points produce no segments. With exactly two points the control
/// points simply lie on the chord.
pub fn interpolate(points: &[Point]) -> Vec<Segment> {
    if points.len() < 2 {
        log::trace!("interpolate: {} point(s), no segments", points.len());
        return Vec::new();
    }

    let mut segments: Vec<Segment> = points
        .windows(2)
        .map(|pair| Segment::chord(pair[0], pair[1]))
        .collect();

    for i in 1..points.len() - 1 {
        let m = segments[i - 1].p2;
        let n = segments[i].p1;
        let a = points[i];
        let mm = util::reflect(m, a);
        let nn = util::reflect(n, a);
        segments[i].p1 = util::midpoint(mm, n);
        segments[i - 1].p2 = util::midpoint(nn, m);
    }
    segments
}

/// Iterate over the cubic Béziers of the smooth curve through `points`.
pub fn cubics(points: &[Point]) -> impl Iterator<Item = CubicBez> + '_ {
    interpolate(points)
        .into_iter()
        .zip(points.windows(2))
        .map(|(seg, pair)| seg.to_cubic(pair[0], pair[1]))
}
