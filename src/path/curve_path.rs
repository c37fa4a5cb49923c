use crate::{
    curve::{Curve, CurveKind},
    foundation::{error::KinemaResult, math::wrap01},
    geometry::{
        point::{Point, SharedPoint},
        rect::Rectangle,
    },
    path::PathSegment,
};

/// Segment backed by a Bezier or Catmull-Rom [`Curve`].
#[derive(Clone, Debug)]
pub struct CurvePath {
    curve: Curve,
}

impl CurvePath {
    pub fn new(mut curve: Curve) -> Self {
        curve.update();
        Self { curve }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }
}

impl From<Curve> for CurvePath {
    fn from(curve: Curve) -> Self {
        Self::new(curve)
    }
}

impl PathSegment for CurvePath {
    fn num_control_points(&self) -> usize {
        self.curve.num_control_points()
    }

    fn control_point(&self, index: usize) -> Option<SharedPoint> {
        self.curve.control_point(index).cloned()
    }

    fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()> {
        self.curve.set_point(point, index)
    }

    fn position(&self, t: f64) -> Point {
        self.curve.solve(wrap01(t))
    }

    fn length(&self) -> f64 {
        self.curve.length()
    }

    fn bounding_box(&self) -> Rectangle {
        self.curve.bounding_box()
    }

    fn start_curve_position(&self) -> Point {
        self.curve.start_curve_position()
    }

    fn end_curve_position(&self) -> Point {
        self.curve.end_curve_position()
    }

    fn contour(&self, n: usize) -> Vec<Point> {
        self.curve.contour(n)
    }

    fn update_path(&mut self) {
        self.curve.update();
    }

    fn append_to(&self, out: &mut kurbo::BezPath) {
        self.curve.append_to(out);
    }

    fn start_index(&self) -> usize {
        match self.curve.kind() {
            CurveKind::CatmullRom => 1,
            _ => 0,
        }
    }

    fn end_index(&self) -> usize {
        match self.curve.kind() {
            CurveKind::CatmullRom => 2,
            _ => self.curve.num_control_points() - 1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/curve_path.rs"]
mod tests;
