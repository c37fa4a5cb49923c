use crate::geometry::point::Point;

/// Quadratic Bernstein blend of three control points.
pub(crate) fn solve_quadric(p: [Point; 3], t: f64) -> Point {
    let t1 = 1.0 - t;
    let a = t1 * t1;
    let b = 2.0 * t1 * t;
    let c = t * t;
    Point::new(
        a * p[0].x + b * p[1].x + c * p[2].x,
        a * p[0].y + b * p[1].y + c * p[2].y,
    )
}

/// Cubic Bernstein blend of four control points.
pub(crate) fn solve_cubic(p: [Point; 4], t: f64) -> Point {
    let t1 = 1.0 - t;
    let a = t1 * t1 * t1;
    let b = 3.0 * t1 * t1 * t;
    let c = 3.0 * t1 * t * t;
    let d = t * t * t;
    Point::new(
        a * p[0].x + b * p[1].x + c * p[2].x + d * p[3].x,
        a * p[0].y + b * p[1].y + c * p[2].y + d * p[3].y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
