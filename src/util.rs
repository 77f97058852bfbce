use kurbo::Point;

/// Reflect `p` through the point `across`.
pub fn reflect(p: Point, across: Point) -> Point {
    Point::new(2.0 * across.x - p.x, 2.0 * across.y - p.y)
}

/// The point halfway between `p` and `q`.
///
/// Computed as `(p + q) / 2` per component, which is not always bitwise
/// equal to `p.lerp(q, 0.5)`.
pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_through_origin() {
        let p = reflect(Point::new(3.0, -2.0), Point::ORIGIN);
        assert_eq!(p, Point::new(-3.0, 2.0));
    }

    #[test]
    fn reflect_twice_is_identity() {
        let a = Point::new(10.0, 4.0);
        let p = Point::new(7.5, 1.25);
        assert_eq!(reflect(reflect(p, a), a), p);
    }

    #[test]
    fn midpoint_of_reflection_is_center() {
        let a = Point::new(10.0, 0.0);
        let m = Point::new(7.0, 3.0);
        assert_eq!(midpoint(m, reflect(m, a)), a);
    }
}
