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

/// Closed rectangle perimeter starting and ending at the top-left corner.
///
/// Corners are stored top-left, top-right, bottom-right, bottom-left. Moving one corner drags its
/// two neighbours along so the shape stays axis aligned; the adjustment happens in
/// [`PathSegment::update_path`] by comparing against the corners seen last time. When more than
/// one corner moved since then (a whole-shape transform) the corners are taken as given.
#[derive(Clone, Debug)]
pub struct ShapePath {
    corners: [SharedPoint; 4],
    last: [Point; 4],
    clockwise: bool,
    length: f64,
    bbox: Rectangle,
}

impl ShapePath {
    /// Rectangle spanned by two opposite corners, in any order.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64, clockwise: bool) -> Self {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let corners = [
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        ];
        let mut shape = Self {
            corners: corners.map(SharedPoint::from),
            last: corners,
            clockwise,
            length: 0.0,
            bbox: Rectangle::empty(),
        };
        shape.update_path();
        shape
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn set_clockwise(&mut self, clockwise: bool) -> &mut Self {
        self.clockwise = clockwise;
        self
    }

    /// Corners in traversal order, closing back on the first.
    fn route(&self) -> [Point; 5] {
        let c = self.corners.each_ref().map(SharedPoint::get);
        if self.clockwise {
            [c[0], c[1], c[2], c[3], c[0]]
        } else {
            [c[0], c[3], c[2], c[1], c[0]]
        }
    }

    /// Propagate a single moved corner to the two corners sharing its edges.
    fn square_up(&mut self) {
        let mut moved = (0..4).filter(|&i| self.corners[i].get() != self.last[i]);
        let (Some(i), None) = (moved.next(), moved.next()) else {
            return;
        };
        let p = self.corners[i].get();
        // (neighbour sharing y, neighbour sharing x)
        let (same_y, same_x) = match i {
            0 => (1, 3),
            1 => (0, 2),
            2 => (3, 1),
            _ => (2, 0),
        };
        let a = self.corners[same_y].get();
        self.corners[same_y].set_xy(a.x, p.y);
        let b = self.corners[same_x].get();
        self.corners[same_x].set_xy(p.x, b.y);
    }
}

impl PathSegment for ShapePath {
    fn num_control_points(&self) -> usize {
        4
    }

    fn control_point(&self, index: usize) -> Option<SharedPoint> {
        self.corners.get(index).cloned()
    }

    /// Moves corner `index` to the coordinates of `point`. Corners are never aliased, since sharing
    /// one with another segment would let the rectangle be skewed.
    fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()> {
        let corner = self.corners.get(index).ok_or_else(|| {
            KinemaError::geometry(format!("shape has 4 corners, index {index} is out of range"))
        })?;
        corner.set(point.get());
        Ok(())
    }

    fn position(&self, t: f64) -> Point {
        let route = self.route();
        if self.length <= 0.0 {
            return route[0];
        }
        let mut remaining = wrap01(t) * self.length;
        for pair in route.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let edge = a.distance(b);
            if remaining <= edge && edge > 0.0 {
                let f = remaining / edge;
                return Point::new(lerp(a.x, b.x, f), lerp(a.y, b.y, f));
            }
            remaining -= edge;
        }
        route[0]
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn bounding_box(&self) -> Rectangle {
        self.bbox
    }

    fn start_curve_position(&self) -> Point {
        self.corners[0].get()
    }

    fn end_curve_position(&self) -> Point {
        self.corners[0].get()
    }

    fn update_path(&mut self) {
        self.square_up();
        let route = self.route();
        self.length = route.windows(2).map(|w| w[0].distance(w[1])).sum();
        self.bbox = bounds_of(route);
        self.last = self.corners.each_ref().map(SharedPoint::get);
    }

    fn append_to(&self, out: &mut kurbo::BezPath) {
        for p in &self.route()[1..4] {
            out.line_to(*p);
        }
        out.close_path();
    }

    fn end_index(&self) -> usize {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/shape.rs"]
mod tests;
