//! Composite path: an ordered list of segments evaluated as one curve over `[0, 1]`.
//!
//! Each segment owns a slice of normalized time proportional to its share of the total length.
//! Consecutive segments built through the `add_*_to` methods share their joint control point, so
//! moving a joint moves both neighbours.

use std::fmt;

use crate::{
    animation::behavior::{Behavior, BehaviorTarget},
    curve::Curve,
    foundation::{
        error::{KinemaError, KinemaResult},
        math::wrap01,
    },
    geometry::{
        matrix::Matrix,
        point::{Point, SharedPoint},
        rect::Rectangle,
    },
    path::{PathSegment, curve_path::CurvePath, linear::LinearPath, shape::ShapePath},
};

/// Side of the square grab area around an editable control point.
pub const HANDLE_SIZE: f64 = 20.0;

/// Translate/rotate/scale written by path behaviors, relative to the snapshot bounds.
#[derive(Clone, Copy, Debug)]
struct PathTransform {
    tx: f64,
    ty: f64,
    angle: f64,
    rot_anchor: (f64, f64),
    sx: f64,
    sy: f64,
    scale_anchor: (f64, f64),
    alpha: f64,
    bounds: Rectangle,
}

impl Default for PathTransform {
    fn default() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            angle: 0.0,
            rot_anchor: (0.5, 0.5),
            sx: 1.0,
            sy: 1.0,
            scale_anchor: (0.5, 0.5),
            alpha: 1.0,
            bounds: Rectangle::empty(),
        }
    }
}

impl PathTransform {
    fn pivot(&self, (ax, ay): (f64, f64)) -> (f64, f64) {
        (
            self.bounds.x + ax * self.width(),
            self.bounds.y + ay * self.height(),
        )
    }

    fn matrix(&self) -> Matrix {
        Matrix::anchored(
            self.tx,
            self.ty,
            self.angle,
            self.pivot(self.rot_anchor),
            (self.sx, self.sy),
            self.pivot(self.scale_anchor),
        )
    }
}

impl BehaviorTarget for PathTransform {
    fn width(&self) -> f64 {
        self.bounds.width.max(0.0)
    }

    fn height(&self) -> f64 {
        self.bounds.height.max(0.0)
    }

    fn location(&self) -> (f64, f64) {
        (self.tx, self.ty)
    }

    fn set_location(&mut self, x: f64, y: f64) {
        self.tx = x;
        self.ty = y;
    }

    fn set_rotation_anchored(&mut self, angle: f64, anchor_x: f64, anchor_y: f64) {
        self.angle = angle;
        self.rot_anchor = (anchor_x, anchor_y);
    }

    fn set_scale_anchored(&mut self, sx: f64, sy: f64, anchor_x: f64, anchor_y: f64) {
        self.sx = sx;
        self.sy = sy;
        self.scale_anchor = (anchor_x, anchor_y);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}

#[derive(Default)]
pub struct Path {
    segments: Vec<Box<dyn PathSegment>>,
    segment_start: Vec<f64>,
    segment_duration: Vec<f64>,
    length: f64,
    bbox: Rectangle,
    /// Distinct control point handles across all segments, in first-seen order.
    points: Vec<SharedPoint>,
    cursor: Option<SharedPoint>,
    closed: bool,
    interactive: bool,
    grabbed: Option<(SharedPoint, Point)>,
    behaviors: Vec<Box<dyn Behavior>>,
    transform: PathTransform,
    /// Untransformed control points captured by `end_path`.
    base: Vec<Point>,
    matrix: Matrix,
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("segments", &self.segments)
            .field("length", &self.length)
            .field("bbox", &self.bbox)
            .field("closed", &self.closed)
            .field("interactive", &self.interactive)
            .field("behaviors", &self.behaviors.len())
            .finish_non_exhaustive()
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight line path.
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let mut path = Self::new();
        path.begin_path(x0, y0).add_line_to(x1, y1).end_path();
        path
    }

    pub fn quadric(x0: f64, y0: f64, cx: f64, cy: f64, x1: f64, y1: f64) -> Self {
        let mut path = Self::new();
        path.begin_path(x0, y0)
            .add_quadric_to(cx, cy, x1, y1)
            .end_path();
        path
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cubic(
        x0: f64,
        y0: f64,
        c0x: f64,
        c0y: f64,
        c1x: f64,
        c1y: f64,
        x1: f64,
        y1: f64,
    ) -> Self {
        let mut path = Self::new();
        path.begin_path(x0, y0)
            .add_cubic_to(c0x, c0y, c1x, c1y, x1, y1)
            .end_path();
        path
    }

    /// Rectangle perimeter from `(x0, y0)` to the opposite corner `(x1, y1)`.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64, clockwise: bool) -> Self {
        let mut path = Self::new();
        path.add_segment(Box::new(ShapePath::rectangle(x0, y0, x1, y1, clockwise)))
            .end_path();
        path.closed = true;
        path
    }

    /// Catmull-Rom spline through `points`.
    ///
    /// Open splines use the first and last points as tangent guides only and need at least 4
    /// points. Closed splines pass through every point and need at least 3.
    pub fn catmull_rom(points: &[Point], closed: bool) -> KinemaResult<Self> {
        let min = if closed { 3 } else { 4 };
        if points.len() < min {
            return Err(KinemaError::config(format!(
                "{} catmull-rom path needs at least {min} points, got {}",
                if closed { "closed" } else { "open" },
                points.len()
            )));
        }

        let mut handles: Vec<SharedPoint> = points.iter().copied().map(SharedPoint::from).collect();
        if closed {
            let n = handles.len();
            handles.insert(0, handles[n - 1].clone());
            handles.push(handles[1].clone());
            handles.push(handles[2].clone());
        }

        let mut path = Self::new();
        for w in handles.windows(4) {
            let curve = Curve::catmull_rom([w[0].clone(), w[1].clone(), w[2].clone(), w[3].clone()]);
            path.add_segment(Box::new(CurvePath::new(curve)));
        }
        path.closed = closed;
        path.end_path();
        Ok(path)
    }

    /// Start a new sub-path at `(x, y)`.
    pub fn begin_path(&mut self, x: f64, y: f64) -> &mut Self {
        self.cursor = Some(SharedPoint::new(x, y));
        self.closed = false;
        self
    }

    /// Current pen position. Defaults to the origin when `begin_path` was never called.
    fn pen(&mut self) -> SharedPoint {
        self.cursor
            .get_or_insert_with(|| SharedPoint::new(0.0, 0.0))
            .clone()
    }

    pub fn add_line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let start = self.pen();
        let end = SharedPoint::new(x, y);
        self.push_segment(Box::new(LinearPath::new(start, end.clone())), end)
    }

    pub fn add_quadric_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        let start = self.pen();
        let end = SharedPoint::new(x, y);
        let curve = Curve::quadric_handles(start, SharedPoint::new(cx, cy), end.clone());
        self.push_segment(Box::new(CurvePath::new(curve)), end)
    }

    pub fn add_cubic_to(
        &mut self,
        c0x: f64,
        c0y: f64,
        c1x: f64,
        c1y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        let start = self.pen();
        let end = SharedPoint::new(x, y);
        let curve = Curve::cubic_handles(
            start,
            SharedPoint::new(c0x, c0y),
            SharedPoint::new(c1x, c1y),
            end.clone(),
        );
        self.push_segment(Box::new(CurvePath::new(curve)), end)
    }

    /// Append an arbitrary segment; the pen moves to its end point.
    pub fn add_segment(&mut self, segment: Box<dyn PathSegment>) -> &mut Self {
        let end = segment
            .control_point(segment.end_index())
            .unwrap_or_else(|| SharedPoint::from_point(segment.end_curve_position()));
        self.push_segment(segment, end)
    }

    fn push_segment(&mut self, segment: Box<dyn PathSegment>, end: SharedPoint) -> &mut Self {
        self.segments.push(segment);
        self.cursor = Some(end);
        self
    }

    /// Alias the last segment's end point to the first segment's start point.
    pub fn close_path(&mut self) -> KinemaResult<&mut Self> {
        let first = self
            .segments
            .first()
            .and_then(|s| s.control_point(s.start_index()))
            .ok_or_else(|| KinemaError::geometry("cannot close a path without segments"))?;
        if let Some(last) = self.segments.last_mut() {
            let end = last.end_index();
            last.set_point(first.clone(), end)?;
        }
        self.cursor = Some(first);
        self.closed = true;
        Ok(self)
    }

    /// Finish construction: collect control points, compute caches and snapshot the base shape.
    pub fn end_path(&mut self) -> &mut Self {
        self.collect_points();
        self.update_path();
        self.take_snapshot();
        self
    }

    fn collect_points(&mut self) {
        self.points.clear();
        for seg in &self.segments {
            for i in 0..seg.num_control_points() {
                if let Some(h) = seg.control_point(i)
                    && !self.points.iter().any(|p| p.ptr_eq(&h))
                {
                    self.points.push(h);
                }
            }
        }
    }

    fn take_snapshot(&mut self) {
        self.base = self.points.iter().map(SharedPoint::get).collect();
        self.transform.bounds = self.bbox;
        self.matrix = Matrix::IDENTITY;
    }

    /// Piecewise-linear copy sampled at `n + 1` points.
    pub fn flatten(&self, n: usize, closed: bool) -> Path {
        let pts = self.contour(n);
        let mut out = Path::new();
        if let Some(first) = pts.first() {
            out.begin_path(first.x, first.y);
            for p in &pts[1..] {
                out.add_line_to(p.x, p.y);
            }
        }
        if closed && out.close_path().is_err() {
            tracing::debug!("flattened path has no segments to close");
        }
        out.end_path();
        out
    }

    pub fn segments(&self) -> &[Box<dyn PathSegment>] {
        &self.segments
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// `(start, duration)` of segment `index` in normalized path time.
    pub fn segment_window(&self, index: usize) -> Option<(f64, f64)> {
        Some((
            *self.segment_start.get(index)?,
            *self.segment_duration.get(index)?,
        ))
    }

    /// Transform produced by the last `apply_behaviors` call.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn alpha(&self) -> f64 {
        self.transform.alpha
    }

    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut out = kurbo::BezPath::new();
        self.append_to(&mut out);
        out
    }

    // interactive editing

    pub fn set_interactive(&mut self, interactive: bool) -> &mut Self {
        self.interactive = interactive;
        if !interactive {
            self.grabbed = None;
        }
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Grab the first control point within half a handle of `(x, y)`.
    pub fn press(&mut self, x: f64, y: f64) -> bool {
        if !self.interactive {
            return false;
        }
        let half = HANDLE_SIZE / 2.0;
        self.grabbed = self.points.iter().find_map(|h| {
            let p = h.get();
            ((p.x - x).abs() <= half && (p.y - y).abs() <= half)
                .then(|| (h.clone(), Point::new(p.x - x, p.y - y)))
        });
        self.grabbed.is_some()
    }

    /// Move the grabbed control point, keeping the offset from the press position.
    ///
    /// While behaviors hold the path transformed, the edit is made on the untransformed shape and
    /// re-projected, so shapes square up against their own axes.
    pub fn drag(&mut self, x: f64, y: f64) {
        if !self.interactive {
            return;
        }
        let Some((handle, offset)) = self.grabbed.clone() else {
            return;
        };
        let target = Point::new(x + offset.x, y + offset.y);

        let inverse = self
            .matrix
            .inverse()
            .filter(|_| !self.matrix.is_identity() && self.base.len() == self.points.len());
        match inverse {
            Some(inv) => {
                for (h, base) in self.points.iter().zip(&self.base) {
                    h.set(*base);
                }
                self.update_path();
                handle.set(inv.transform_point(target));
                self.update_path();
                self.base = self.points.iter().map(SharedPoint::get).collect();
                self.project_base();
            }
            None => {
                handle.set(target);
                self.update_path();
                self.base = self.points.iter().map(SharedPoint::get).collect();
            }
        }
    }

    pub fn release(&mut self) {
        self.grabbed = None;
    }

    // behaviors

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) -> &mut Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn remove_behavior(&mut self, id: &str) -> usize {
        let before = self.behaviors.len();
        self.behaviors.retain(|b| b.id() != Some(id));
        before - self.behaviors.len()
    }

    pub fn empty_behavior_list(&mut self) {
        self.behaviors.clear();
    }

    /// Run path behaviors at `time` and re-project the base shape through the result.
    pub fn apply_behaviors(&mut self, time: f64) {
        if self.behaviors.is_empty() {
            return;
        }
        if self.base.len() != self.points.len() {
            self.take_snapshot();
        }
        for behavior in &mut self.behaviors {
            behavior.apply(time, &mut self.transform);
        }
        self.matrix = self.transform.matrix();
        self.project_base();
    }

    fn project_base(&mut self) {
        for (handle, base) in self.points.iter().zip(&self.base) {
            handle.set(self.matrix.transform_point(*base));
        }
        self.update_path();
    }
}

impl PathSegment for Path {
    fn num_control_points(&self) -> usize {
        self.points.len()
    }

    fn control_point(&self, index: usize) -> Option<SharedPoint> {
        self.points.get(index).cloned()
    }

    /// Swap control point `index` for `point` in every segment that references it.
    ///
    /// Segments that copy coordinates instead of adopting the handle keep their own, so the handle
    /// list is rebuilt from the segments afterwards.
    fn set_point(&mut self, point: SharedPoint, index: usize) -> KinemaResult<()> {
        let n = self.points.len();
        let old = self.points.get(index).cloned().ok_or_else(|| {
            KinemaError::geometry(format!("control point {index} out of range (0..{n})"))
        })?;
        for seg in &mut self.segments {
            for i in 0..seg.num_control_points() {
                if seg.control_point(i).is_some_and(|h| h.ptr_eq(&old)) {
                    seg.set_point(point.clone(), i)?;
                }
            }
        }
        self.collect_points();
        Ok(())
    }

    fn position(&self, t: f64) -> Point {
        let n = self.segments.len();
        if n == 0 {
            return self.cursor.as_ref().map(SharedPoint::get).unwrap_or_default();
        }
        if self.length <= 0.0 || self.segment_start.len() != n {
            return self.segments[0].start_curve_position();
        }

        let t = wrap01(t);
        let (mut lo, mut hi) = (0, n);
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.segment_start[mid] + self.segment_duration[mid] < t {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        let i = lo.min(n - 1);
        let duration = self.segment_duration[i];
        let local = if duration > 0.0 {
            ((t - self.segment_start[i]) / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.segments[i].position(local)
    }

    fn position_from_length(&self, len: f64) -> Point {
        if self.length <= 0.0 {
            return self.start_curve_position();
        }
        let mut remaining = wrap01(len / self.length) * self.length;
        for seg in &self.segments {
            let l = seg.length();
            if remaining <= l && l > 0.0 {
                return seg.position(remaining / l);
            }
            remaining -= l;
        }
        self.end_curve_position()
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn bounding_box(&self) -> Rectangle {
        self.bbox
    }

    fn start_curve_position(&self) -> Point {
        match self.segments.first() {
            Some(seg) => seg.start_curve_position(),
            None => self.cursor.as_ref().map(SharedPoint::get).unwrap_or_default(),
        }
    }

    fn end_curve_position(&self) -> Point {
        match self.segments.last() {
            Some(seg) => seg.end_curve_position(),
            None => self.start_curve_position(),
        }
    }

    /// Recompute segment caches, time breakpoints and bounds.
    fn update_path(&mut self) {
        for seg in &mut self.segments {
            seg.update_path();
        }
        self.length = self.segments.iter().map(|s| s.length()).sum();

        self.segment_start.clear();
        self.segment_duration.clear();
        let mut start = 0.0;
        for seg in &self.segments {
            let duration = if self.length > 0.0 {
                seg.length() / self.length
            } else {
                0.0
            };
            self.segment_start.push(start);
            self.segment_duration.push(duration);
            start += duration;
        }

        let mut bbox = Rectangle::empty();
        for seg in &self.segments {
            bbox.union_rectangle(&seg.bounding_box());
        }
        self.bbox = bbox;
    }

    fn append_to(&self, out: &mut kurbo::BezPath) {
        let mut pen: Option<Point> = None;
        for seg in &self.segments {
            let start = seg.start_curve_position();
            if pen != Some(start) {
                out.move_to(start);
            }
            seg.append_to(out);
            pen = Some(seg.end_curve_position());
        }
        let already_closed = matches!(out.elements().last(), Some(kurbo::PathEl::ClosePath));
        if self.closed && !self.segments.is_empty() && !already_closed {
            out.close_path();
        }
    }

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.segments
            .last()
            .and_then(|s| s.control_point(s.end_index()))
            .and_then(|h| self.points.iter().position(|p| p.ptr_eq(&h)))
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/composite.rs"]
mod tests;
