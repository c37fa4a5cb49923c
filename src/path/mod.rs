//! Traversable segments parameterized by normalized time or arc length.
//!
//! Segments follow a two-phase edit protocol: mutate control points (through [`PathSegment::set_point`]
//! or a [`SharedPoint`] handle), then call [`PathSegment::update_path`] to refresh cached length and
//! bounds. Nothing recomputes implicitly.

pub(crate) mod composite;
pub(crate) mod curve_path;
pub(crate) mod linear;
pub(crate) mod shape;

use std::fmt;

use crate::{
    foundation::{error::KinemaResult, math::wrap01},
    geometry::{
        point::{Point, SharedPoint},
        rect::Rectangle,
    },
};

pub trait PathSegment: fmt::Debug {
    fn num_control_points(&self) -> usize;

    /// Handle to control point `index`. Mutating it edits the segment in place.
    fn control_point(&self, index: usize) -> Option<SharedPoint>;

    /// Replace control point `index` with `point` (aliasing it).
    fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()>;

    /// Position at normalized time `t`. Values outside `[0, 1]` wrap.
    fn position(&self, t: f64) -> Point;

    fn length(&self) -> f64;

    fn bounding_box(&self) -> Rectangle;

    fn start_curve_position(&self) -> Point;

    fn end_curve_position(&self) -> Point;

    /// `n + 1` evenly spaced samples.
    fn contour(&self, n: usize) -> Vec<Point> {
        let n = n.max(1);
        (0..=n)
            .map(|i| self.position(i as f64 / n as f64))
            .collect()
    }

    /// Refresh cached length and bounds after control points moved.
    fn update_path(&mut self);

    /// Emit this segment into `out`, assuming the pen is at its start.
    fn append_to(&self, out: &mut kurbo::BezPath);

    /// Position `len` units along the segment, wrapped by its length.
    fn position_from_length(&self, len: f64) -> Point {
        let total = self.length();
        if total <= 0.0 {
            return self.start_curve_position();
        }
        self.position(wrap01(len / total))
    }

    /// Index of the control point the segment starts at.
    fn start_index(&self) -> usize {
        0
    }

    /// Index of the control point the segment ends at.
    fn end_index(&self) -> usize {
        self.num_control_points().saturating_sub(1)
    }
}

/// Bounding box of an explicit point list.
pub(crate) fn bounds_of(points: impl IntoIterator<Item = Point>) -> Rectangle {
    let mut bbox = Rectangle::empty();
    for p in points {
        bbox.union(p.x, p.y);
    }
    bbox
}
