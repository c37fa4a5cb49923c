use crate::geometry::point::Point;

/// Uniform Catmull-Rom spline between `p[1]` and `p[2]`.
pub(crate) fn solve_catmull_rom(p: [Point; 4], t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    Point::new(
        blend(p[0].x, p[1].x, p[2].x, p[3].x),
        blend(p[0].y, p[1].y, p[2].y, p[3].y),
    )
}

/// Cubic Bezier control points that trace the same span as the Catmull-Rom segment.
pub(crate) fn catmull_rom_to_cubic(p: [Point; 4]) -> [Point; 4] {
    let c1 = Point::new(
        p[1].x + (p[2].x - p[0].x) / 6.0,
        p[1].y + (p[2].y - p[0].y) / 6.0,
    );
    let c2 = Point::new(
        p[2].x - (p[3].x - p[1].x) / 6.0,
        p[2].y - (p[3].y - p[1].y) / 6.0,
    );
    [p[1], c1, c2, p[2]]
}

#[cfg(test)]
#[path = "../../tests/unit/curve/catmull.rs"]
mod tests;
