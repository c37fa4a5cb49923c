use crate::{
    foundation::{
        error::{KinemaError, KinemaResult},
        math::{lerp, wrap01},
    },
    geometry::{
        point::{Point, SharedPoint},
        rect::Rectangle,
    },
    path::{PathSegment, bounds_of},
};

/// Straight segment between two control points.
#[derive(Clone, Debug)]
pub struct LinearPath {
    start: SharedPoint,
    end: SharedPoint,
    length: f64,
    bbox: Rectangle,
}

impl LinearPath {
    pub fn new(start: SharedPoint, end: SharedPoint) -> Self {
        let mut seg = Self {
            start,
            end,
            length: 0.0,
            bbox: Rectangle::empty(),
        };
        seg.update_path();
        seg
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.into(), end.into())
    }
}

impl PathSegment for LinearPath {
    fn num_control_points(&self) -> usize {
        2
    }

    fn control_point(&self, index: usize) -> Option<SharedPoint> {
        match index {
            0 => Some(self.start.clone()),
            1 => Some(self.end.clone()),
            _ => None,
        }
    }

    fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()> {
        match index {
            0 => self.start = point,
            1 => self.end = point,
            _ => {
                return Err(KinemaError::geometry(format!(
                    "linear segment has 2 control points, index {index} is out of range"
                )));
            }
        }
        Ok(())
    }

    fn position(&self, t: f64) -> Point {
        let t = wrap01(t);
        let (a, b) = (self.start.get(), self.end.get());
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn bounding_box(&self) -> Rectangle {
        self.bbox
    }

    fn start_curve_position(&self) -> Point {
        self.start.get()
    }

    fn end_curve_position(&self) -> Point {
        self.end.get()
    }

    fn update_path(&mut self) {
        let (a, b) = (self.start.get(), self.end.get());
        self.length = a.distance(b);
        self.bbox = bounds_of([a, b]);
    }

    fn append_to(&self, out: &mut kurbo::BezPath) {
        out.line_to(self.end.get());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/linear.rs"]
mod tests;
